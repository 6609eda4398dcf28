//! The scan profile catalog.
//!
//! Every canned scan is a static [`ScanProfile`] descriptor. Adding a
//! profile means adding a row to [`PROFILES`]; nothing else branches on
//! profile identity.

use std::fmt;

use crate::error::{RedeyeError, Result};

/// Port value meaning "every port", rendered as `-p-`.
pub const ALL_PORTS: &str = "-";

/// Where a profile is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileGroup {
    /// Main menu scans.
    Basic,
    /// Firewall/IDS evasion and discovery.
    Evasion,
    /// Vulnerability and service specific scans.
    Service,
    /// Deep and aggressive scans.
    Deep,
}

impl ProfileGroup {
    /// Menu heading for the group.
    pub fn heading(&self) -> &'static str {
        match self {
            ProfileGroup::Basic => "Basic Scans",
            ProfileGroup::Evasion => "Firewall/IDS Evasion & Discovery",
            ProfileGroup::Service => "Vulnerability & Service Specific Scans",
            ProfileGroup::Deep => "Deep & Aggressive Scans",
        }
    }
}

impl fmt::Display for ProfileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// An additional value a profile needs before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraInput {
    /// Prompt key (also the `REDEYE_PROMPT_*` override suffix).
    pub key: &'static str,
    /// Short name used in messages.
    pub label: &'static str,
    /// Flag placed before the value.
    pub flag: &'static str,
    /// Question shown to the user.
    pub prompt: &'static str,
}

/// A named, pre-built scan strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProfile {
    /// Stable identifier used on the command line.
    pub id: &'static str,
    /// Menu position within its tier (basic 1-5, advanced 1-20).
    pub number: u8,
    pub group: ProfileGroup,
    /// Short display name.
    pub name: &'static str,
    /// Longer menu label.
    pub label: &'static str,
    /// Scanner arguments, before ports and target.
    pub base_args: &'static [&'static str],
    /// Ports used when the user has not set any.
    pub default_ports: Option<&'static str>,
    /// Whether user ports replace the default.
    pub allows_port_override: bool,
    /// Whether the scanner must run with root privileges.
    pub requires_privilege: bool,
    /// Whether the user must explicitly confirm before running.
    pub requires_confirmation: bool,
    /// Extra value, e.g. the idle scan zombie host.
    pub extra_input: Option<ExtraInput>,
    /// Shown before the scan runs.
    pub warning: Option<&'static str>,
}

impl ScanProfile {
    const fn new(
        group: ProfileGroup,
        number: u8,
        id: &'static str,
        name: &'static str,
        label: &'static str,
        base_args: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            number,
            group,
            name,
            label,
            base_args,
            default_ports: None,
            allows_port_override: true,
            requires_privilege: false,
            requires_confirmation: false,
            extra_input: None,
            warning: None,
        }
    }

    const fn ports(mut self, ports: &'static str) -> Self {
        self.default_ports = Some(ports);
        self
    }

    const fn fixed_ports(mut self) -> Self {
        self.allows_port_override = false;
        self
    }

    const fn privileged(mut self) -> Self {
        self.requires_privilege = true;
        self
    }

    const fn confirmed(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }

    const fn extra(mut self, input: ExtraInput) -> Self {
        self.extra_input = Some(input);
        self
    }

    const fn warn(mut self, warning: &'static str) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Whether this profile is on the main menu.
    pub fn is_basic(&self) -> bool {
        self.group == ProfileGroup::Basic
    }
}

const IDLE_ZOMBIE: ExtraInput = ExtraInput {
    key: "zombie",
    label: "Zombie host",
    flag: "-sI",
    prompt: "Enter Zombie IP for Idle Scan",
};

use ProfileGroup::{Basic, Deep, Evasion, Service};

/// All profiles: five basic scans followed by twenty advanced ones.
pub const PROFILES: &[ScanProfile] = &[
    ScanProfile::new(Basic, 1, "ping", "Ping Scan", "Ping Scan (Host Discovery only)", &["-sn"])
        .fixed_ports(),
    ScanProfile::new(Basic, 2, "intense", "Intense Scan", "Intense Scan (-A -T4)", &["-A", "-T4"]),
    ScanProfile::new(Basic, 3, "fast", "Fast Scan", "Fast Scan (Top 100 ports)", &["-F", "-T4"]),
    ScanProfile::new(
        Basic,
        4,
        "default-scripts",
        "Default Scripts Scan",
        "Default Scripts Scan (-sC)",
        &["-sC"],
    ),
    ScanProfile::new(
        Basic,
        5,
        "vuln",
        "Vulnerability Scan",
        "Vulnerability Scan (General 'vuln' scripts)",
        &["--script", "vuln", "-sV"],
    ),
    // Firewall/IDS evasion & discovery
    ScanProfile::new(
        Evasion,
        1,
        "aggressive-discovery",
        "Aggressive Discovery",
        "Aggressive Discovery (All Ping Types)",
        &["-sn", "-PE", "-PS22,80,443", "-PA80,443", "-PU53", "-T4"],
    )
    .fixed_ports()
    .privileged(),
    ScanProfile::new(
        Evasion,
        2,
        "full-port-no-ping",
        "Full Port Scan (No Ping)",
        "Full Port Scan (No Ping)",
        &["-Pn", "-sS", "-T4"],
    )
    .ports(ALL_PORTS)
    .privileged(),
    ScanProfile::new(
        Evasion,
        3,
        "fragment",
        "Firewall Evasion (Fragment Packets)",
        "Firewall Evasion (Fragment Packets)",
        &["-f", "-sS", "-T4"],
    )
    .privileged(),
    ScanProfile::new(
        Evasion,
        4,
        "decoy",
        "Firewall Evasion (Decoy Scan)",
        "Firewall Evasion (Decoy Scan)",
        &["-D", "RND:10", "-sS", "-T4"],
    )
    .privileged(),
    ScanProfile::new(
        Evasion,
        5,
        "idle",
        "Idle Scan",
        "Idle Scan (Ultimate Stealth - requires zombie host)",
        &["-Pn"],
    )
    .extra(IDLE_ZOMBIE)
    .privileged(),
    // Vulnerability & service specific
    ScanProfile::new(
        Service,
        6,
        "web-server",
        "Comprehensive Web Server Scan",
        "Comprehensive Web Server Scan",
        &["--script", "http-enum,http-title,http-vuln*", "-sV", "-T4"],
    )
    .ports("80,443"),
    ScanProfile::new(
        Service,
        7,
        "smb-vuln",
        "SMB Vulnerability Scan",
        "SMB Vulnerability Scan (e.g., EternalBlue)",
        &["--script", "smb-vuln*", "-sV", "-T4"],
    )
    .ports("139,445"),
    ScanProfile::new(
        Service,
        8,
        "ftp-vuln",
        "FTP Vulnerability Scan",
        "FTP Vulnerability Scan",
        &["--script", "ftp-anon,ftp-vuln*", "-sV", "-T4"],
    )
    .ports("21"),
    ScanProfile::new(
        Service,
        9,
        "mysql-vuln",
        "MySQL Vulnerability Scan",
        "MySQL Vulnerability Scan",
        &["--script", "mysql-empty-password,mysql-vuln*", "-sV", "-T4"],
    )
    .ports("3306"),
    ScanProfile::new(
        Service,
        10,
        "heartbleed",
        "Heartbleed SSL Vulnerability Check",
        "Heartbleed SSL Vulnerability Check",
        &["--script", "ssl-heartbleed", "-sV"],
    )
    .ports("443"),
    ScanProfile::new(
        Service,
        11,
        "waf-detect",
        "Detect Web Application Firewall",
        "Detect Web Application Firewall (WAF)",
        &["--script", "http-waf-detect,http-waf-fingerprint", "-T4"],
    )
    .ports("80,443"),
    ScanProfile::new(
        Service,
        12,
        "slowloris",
        "Slowloris DoS Vulnerability Check",
        "Slowloris DoS Vulnerability Check",
        &["--script", "http-slowloris-check", "-T4"],
    ),
    // Deep & aggressive
    ScanProfile::new(
        Deep,
        13,
        "full-tcp-udp",
        "Full TCP & UDP Scan",
        "Full TCP & UDP Scan (Extremely Slow)",
        &["-sS", "-sU", "-T4"],
    )
    .ports("T:-,U:1-4000")
    .privileged()
    .warn("This scan is extremely slow and can take many hours."),
    ScanProfile::new(
        Deep,
        14,
        "safe-scripts",
        "Safe Script Scan",
        "Safe Script Scan (Non-intrusive)",
        &["-sV", "-sC", "--script", "not intrusive"],
    ),
    ScanProfile::new(
        Deep,
        15,
        "exploit",
        "Exploit Script Scan",
        "Exploit Script Scan (Potentially Dangerous)",
        &["-sV", "--script", "exploit", "-T4"],
    )
    .privileged()
    .confirmed()
    .warn("Running 'exploit' scripts is dangerous and may crash the target."),
    ScanProfile::new(
        Deep,
        16,
        "brute-auth",
        "Brute Force Scripts (Auth)",
        "Brute Force Scripts (Auth Category)",
        &["-sV", "--script", "auth", "-T4"],
    ),
    ScanProfile::new(
        Deep,
        17,
        "traceroute-geo",
        "Traceroute & Geo-location",
        "Traceroute & Geo-location",
        &["--traceroute", "--script", "traceroute-geolocation", "-T4"],
    )
    .ports("80"),
    ScanProfile::new(
        Deep,
        18,
        "aggressive-all-ports",
        "Aggressive All Ports Scan",
        "Aggressive All Ports Scan (-A -p-)",
        &["-A", "-T4"],
    )
    .ports(ALL_PORTS)
    .privileged()
    .warn("This is a very noisy and slow scan."),
    ScanProfile::new(
        Deep,
        19,
        "network-sweep",
        "Full Network Sweep (Ping Only)",
        "Full Network Sweep (Ping Only)",
        &["-sn", "-T4"],
    )
    .fixed_ports(),
    ScanProfile::new(
        Deep,
        20,
        "os-all-tcp",
        "All TCP Ports with OS Detection",
        "Scan for ALL TCP ports with OS detection",
        &["-O", "-T4"],
    )
    .ports(ALL_PORTS)
    .privileged(),
];

/// Look a profile up by id.
pub fn find(id: &str) -> Result<&'static ScanProfile> {
    PROFILES
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| RedeyeError::UnknownProfile { id: id.to_string() })
}

/// Main menu profiles, in menu order.
pub fn basic() -> impl Iterator<Item = &'static ScanProfile> {
    PROFILES.iter().filter(|p| p.is_basic())
}

/// Advanced menu profiles, in menu order.
pub fn advanced() -> impl Iterator<Item = &'static ScanProfile> {
    PROFILES.iter().filter(|p| !p.is_basic())
}
