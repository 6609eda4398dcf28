//! Built-in scanner flag reference.

use crate::error::{RedeyeError, Result};

/// A group of related scanner flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideTopic {
    /// Identifier accepted by `redeye guide <TOPIC>`.
    pub id: &'static str,
    pub title: &'static str,
    /// `(flag, description)` pairs.
    pub entries: &'static [(&'static str, &'static str)],
}

pub const TOPICS: &[GuideTopic] = &[
    GuideTopic {
        id: "discovery",
        title: "Host Discovery",
        entries: &[
            ("-sn / -sP", "Ping Scan. Disables port scanning. Best for just discovering which hosts are online."),
            ("-sL", "List Scan. Simply lists targets without scanning them. Good for a quick target overview."),
            ("-Pn", "No Ping. Skips host discovery. Assumes all targets are online. Use if hosts block pings."),
        ],
    },
    GuideTopic {
        id: "techniques",
        title: "Scan Techniques",
        entries: &[
            ("-sS", "TCP SYN (Stealth) Scan. Fast, stealthy, and the most popular scan type. Requires root."),
            ("-sT", "TCP Connect Scan. Slower and more detectable than SYN, but doesn't require root."),
            ("-sU", "UDP Scan. Scans for open UDP ports. Very slow. Requires root."),
        ],
    },
    GuideTopic {
        id: "ports",
        title: "Port Specification",
        entries: &[
            ("-p <range>", "Scan specific ports. Examples: -p 22, -p 1-1023, -p U:53,T:21-25,80."),
            ("-F", "Fast Scan. Scans the 100 most common ports."),
        ],
    },
    GuideTopic {
        id: "detection",
        title: "Service & OS Detection",
        entries: &[
            ("-sV", "Service/Version Detection. Queries open ports to find out the exact service and version running."),
            ("-O", "OS Detection. Tries to determine the target's operating system. Requires root."),
            ("-A", "Aggressive Scan. A shortcut for -O -sV -sC --traceroute."),
        ],
    },
    GuideTopic {
        id: "nse",
        title: "Nmap Scripting Engine (NSE)",
        entries: &[
            ("-sC", "Default Scripts. Runs the default set of scripts. It's considered safe for the target."),
            ("--script <name>", "Runs specific scripts, categories (e.g., 'vuln'), or all scripts."),
        ],
    },
    GuideTopic {
        id: "timing",
        title: "Timing and Performance",
        entries: &[(
            "-T<0-5>",
            "Timing Template. T0 (paranoid) is very slow, T5 (insane) is very fast. T4 is recommended.",
        )],
    },
    GuideTopic {
        id: "output",
        title: "Output Formats",
        entries: &[
            ("-oN <file>", "Normal Output. Saves the output in a standard text file."),
            ("-oX <file>", "XML Output. Saves in XML format, which can be parsed by other tools."),
        ],
    },
];

/// Find a topic by id, or by its 1-based menu number.
pub fn topic(key: &str) -> Result<&'static GuideTopic> {
    let key = key.trim();
    if let Ok(n) = key.parse::<usize>() {
        if let Some(t) = n.checked_sub(1).and_then(|i| TOPICS.get(i)) {
            return Ok(t);
        }
    }
    TOPICS
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(key))
        .ok_or_else(|| RedeyeError::InvalidSelection {
            input: key.to_string(),
        })
}

impl GuideTopic {
    /// Plain-text rendering with aligned flags.
    pub fn render(&self) -> Vec<String> {
        let width = self.entries.iter().map(|(f, _)| f.len()).max().unwrap_or(0);
        let mut lines = vec![format!("{}:", self.title)];
        for (flag, description) in self.entries {
            lines.push(format!("  {:<width$} : {}", flag, description, width = width));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_topics() {
        assert_eq!(TOPICS.len(), 7);
        assert!(TOPICS.iter().all(|t| !t.entries.is_empty()));
    }

    #[test]
    fn lookup_by_number_and_id() {
        assert_eq!(topic("1").unwrap().title, "Host Discovery");
        assert_eq!(topic("7").unwrap().id, "output");
        assert_eq!(topic("NSE").unwrap().title, "Nmap Scripting Engine (NSE)");
    }

    #[test]
    fn unknown_topic_is_invalid_selection() {
        for bad in ["0", "8", "ports-ish", ""] {
            assert!(matches!(
                topic(bad),
                Err(RedeyeError::InvalidSelection { .. })
            ));
        }
    }

    #[test]
    fn render_aligns_flags() {
        let lines = topic("ports").unwrap().render();
        assert_eq!(lines[0], "Port Specification:");
        assert!(lines[1].starts_with("  -p <range> : Scan specific ports."));
        assert!(lines[2].starts_with("  -F         : Fast Scan."));
    }
}
