//! Port specifications.
//!
//! Accepts the subset of the scanner's `-p` grammar RedEye passes through:
//! comma-separated items, each optionally prefixed with a protocol
//! (`T:`, `U:`, `S:`), each a single port, a range, an open range or `-`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RedeyeError, Result};

/// One port item: `[proto:]port`, `[proto:]a-b`, `[proto:]a-`, `[proto:]-b` or `[proto:]-`.
static PORT_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([TUS]):)?(?:(\d+)|(\d+)?-(\d+)?)$").expect("PORT_ITEM must compile")
});

const MAX_PORT: u32 = 65535;

/// A validated port specification, kept in the user's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec(String);

impl PortSpec {
    /// Validate `input`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| RedeyeError::InvalidPorts {
            ports: input.to_string(),
            reason,
        };
        let out_of_range = |port: String| invalid(format!("port {} is out of range 1-65535", port));

        if input.is_empty() {
            return Err(invalid("no ports given".to_string()));
        }
        if input.chars().any(char::is_whitespace) {
            return Err(invalid("whitespace is not allowed".to_string()));
        }

        for item in input.split(',') {
            if item.is_empty() {
                return Err(invalid("empty item".to_string()));
            }
            let caps = PORT_ITEM
                .captures(item)
                .ok_or_else(|| invalid(format!("'{}' is not a port or range", item)))?;

            if let Some(single) = caps.get(2) {
                parse_port(single.as_str()).map_err(&out_of_range)?;
                continue;
            }

            let start = caps
                .get(3)
                .map(|m| parse_port(m.as_str()))
                .transpose()
                .map_err(&out_of_range)?;
            let end = caps
                .get(4)
                .map(|m| parse_port(m.as_str()))
                .transpose()
                .map_err(&out_of_range)?;
            if let (Some(a), Some(b)) = (start, end) {
                if a > b {
                    return Err(invalid(format!("range {}-{} is reversed", a, b)));
                }
            }
        }

        Ok(Self(input.to_string()))
    }

    /// The specification as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PortSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse one port number, returning the offending text when out of range.
fn parse_port(digits: &str) -> std::result::Result<u32, String> {
    match digits.parse::<u32>() {
        Ok(port) if (1..=MAX_PORT).contains(&port) => Ok(port),
        _ => Err(digits.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> String {
        match PortSpec::parse(input) {
            Err(RedeyeError::InvalidPorts { reason, .. }) => reason,
            other => panic!("expected InvalidPorts for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_common_forms() {
        for ok in [
            "22",
            "1-1000",
            "22,80-100,443",
            "-",
            "1-",
            "-1024",
            "T:-,U:1-4000",
            "U:53,T:21-25,80",
            "S:2905",
            "65535",
        ] {
            let spec = PortSpec::parse(ok).unwrap_or_else(|e| panic!("{ok}: {e}"));
            assert_eq!(spec.as_str(), ok);
        }
    }

    #[test]
    fn rejects_whitespace() {
        assert!(reason("22, 80").contains("whitespace"));
        assert!(reason(" 22").contains("whitespace"));
    }

    #[test]
    fn rejects_empty_input_and_items() {
        assert!(reason("").contains("no ports"));
        assert!(reason("22,,80").contains("empty item"));
        assert!(reason("22,").contains("empty item"));
    }

    #[test]
    fn rejects_out_of_range_ports() {
        assert!(reason("0").contains("out of range"));
        assert!(reason("65536").contains("out of range"));
        assert!(reason("1-70000").contains("out of range"));
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(reason("100-10").contains("reversed"));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["http", "22-80-90", "X:22", "t:22", "T:", "--"] {
            assert!(PortSpec::parse(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn invalid_ports_is_recoverable() {
        let err = PortSpec::parse("abc").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn display_matches_input() {
        assert_eq!(PortSpec::parse("139,445").unwrap().to_string(), "139,445");
    }
}
