//! Layering of YAML config values.
//!
//! A later layer wins key by key. Mappings merge recursively, anything else
//! (scalars, sequences) is replaced whole, and an explicit `null` drops the
//! key so the built-in default applies again.

use serde_yaml::{Mapping, Value};

/// Apply `overlay` on top of `base` in place.
pub fn overlay_onto(base: &mut Value, overlay: Value) {
    let Value::Mapping(overlay) = overlay else {
        *base = overlay;
        return;
    };
    let Value::Mapping(base) = base else {
        *base = Value::Mapping(overlay);
        return;
    };

    for (key, value) in overlay {
        if value.is_null() {
            base.remove(&key);
            continue;
        }
        match base.get_mut(&key) {
            Some(existing) => overlay_onto(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}

/// Fold layers lowest priority first into one mapping.
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Mapping(Mapping::new()), |mut merged, layer| {
            overlay_onto(&mut merged, layer);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_tool_override_keeps_siblings() {
        let mut config = yaml("tools:\n  scanner: nmap\n  diff: ndiff\n");
        overlay_onto(&mut config, yaml("tools:\n  scanner: /opt/nmap/bin/nmap\n"));

        assert_eq!(config["tools"]["scanner"], "/opt/nmap/bin/nmap");
        assert_eq!(config["tools"]["diff"], "ndiff");
    }

    #[test]
    fn null_drops_inherited_value() {
        let mut config = yaml("escalation: doas\nauto_install: false");
        overlay_onto(&mut config, yaml("escalation: null"));

        assert!(config.get("escalation").is_none());
        assert_eq!(config["auto_install"], false);
    }

    #[test]
    fn non_mappings_replace_whole() {
        let mut config = yaml("list: [a, b]\ntools:\n  scanner: nmap");
        overlay_onto(&mut config, yaml("list: [c]\ntools: disabled"));

        assert_eq!(config["list"].as_sequence().map(Vec::len), Some(1));
        assert_eq!(config["tools"], "disabled");
    }

    #[test]
    fn layers_apply_in_order() {
        let merged = merge_layers(vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")]);

        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 3);
        assert_eq!(merged["c"], 5);
        assert!(merge_layers(Vec::new()).as_mapping().is_some_and(Mapping::is_empty));
    }
}
