//! Host platform classification.
//!
//! Resolves which package manager can install the scanner tool chain.
//! Checks run in a fixed order and the first match wins:
//!
//! 1. Termux marker (`PREFIX` env var or the Termux prefix directory)
//! 2. `/etc/os-release` contents
//! 3. Package manager binaries on `PATH`
//!
//! Resolution never fails; an unrecognised host yields
//! [`PlatformProfile::unknown`].

use std::fmt;
use std::path::Path;

use super::locator::ToolLocator;

/// Termux installs everything under this prefix.
pub const TERMUX_PREFIX: &str = "/data/data/com.termux/files/usr";

/// Release metadata consulted for distribution detection.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformId {
    Debian,
    DebianLike,
    Arch,
    Redhat,
    Termux,
    Unknown,
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlatformId::Debian => "debian",
            PlatformId::DebianLike => "debian-like",
            PlatformId::Arch => "arch",
            PlatformId::Redhat => "redhat",
            PlatformId::Termux => "termux",
            PlatformId::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Supported system package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Apt,
    Pacman,
    Dnf,
    Yum,
    Pkg,
}

impl PackageManager {
    /// Short identifier (`apt`, `pacman`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Pacman => "pacman",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Pkg => "pkg",
        }
    }

    /// Install command prefix; package names are appended.
    pub fn install_command(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Apt => &["apt-get", "install", "-y"],
            PackageManager::Pacman => &["pacman", "-S", "--noconfirm"],
            PackageManager::Dnf => &["dnf", "install", "-y"],
            PackageManager::Yum => &["yum", "install", "-y"],
            PackageManager::Pkg => &["pkg", "install", "-y"],
        }
    }

    /// Package index refresh command.
    pub fn update_command(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Apt => &["apt-get", "update", "-y"],
            PackageManager::Pacman => &["pacman", "-Sy", "--noconfirm"],
            PackageManager::Dnf => &["dnf", "makecache", "--refresh", "-y"],
            PackageManager::Yum => &["yum", "makecache", "-y"],
            PackageManager::Pkg => &["pkg", "update", "-y"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The resolved host profile. Exactly one is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Platform family.
    pub platform: PlatformId,
    /// Distribution label for display (e.g. "ubuntu").
    pub distro: String,
    /// Package manager, if one was resolved.
    pub package_manager: Option<PackageManager>,
    /// Install command prefix (empty when unknown).
    pub install_command: Vec<String>,
    /// Update command (empty when unknown).
    pub update_command: Vec<String>,
}

impl PlatformProfile {
    fn new(platform: PlatformId, distro: &str, manager: PackageManager) -> Self {
        Self {
            platform,
            distro: distro.to_string(),
            package_manager: Some(manager),
            install_command: manager.install_command().iter().map(|s| s.to_string()).collect(),
            update_command: manager.update_command().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Safe default when nothing matches.
    pub fn unknown() -> Self {
        Self {
            platform: PlatformId::Unknown,
            distro: "unknown".to_string(),
            package_manager: None,
            install_command: Vec::new(),
            update_command: Vec::new(),
        }
    }
}

/// Host inspection hooks, injectable for tests.
pub struct HostFacts<'a> {
    /// Environment variable lookup.
    pub env: &'a dyn Fn(&str) -> Option<String>,
    /// Read a text file, `None` if absent or unreadable.
    pub read_file: &'a dyn Fn(&Path) -> Option<String>,
    /// Whether a filesystem path exists.
    pub path_exists: &'a dyn Fn(&Path) -> bool,
    /// Whether an executable is on the search path.
    pub has_command: &'a dyn Fn(&str) -> bool,
}

/// Resolve the platform of the running host.
pub fn resolve() -> PlatformProfile {
    let locator = ToolLocator::from_env();
    let has_command = |name: &str| locator.is_present(name);
    let host = HostFacts {
        env: &|key| std::env::var(key).ok(),
        read_file: &|path| std::fs::read_to_string(path).ok(),
        path_exists: &|path| path.exists(),
        has_command: &has_command,
    };
    let profile = resolve_with(&host);
    tracing::debug!(
        "Resolved platform {} ({}), package manager {:?}",
        profile.platform,
        profile.distro,
        profile.package_manager
    );
    profile
}

/// Resolve the platform from the given host facts.
pub fn resolve_with(host: &HostFacts<'_>) -> PlatformProfile {
    if is_termux(host) {
        return PlatformProfile::new(PlatformId::Termux, "termux", PackageManager::Pkg);
    }

    if let Some(release) = (host.read_file)(Path::new(OS_RELEASE_PATH)) {
        if let Some(profile) = classify_release(&release, host.has_command) {
            return profile;
        }
    }

    detect_package_manager(host.has_command).unwrap_or_else(PlatformProfile::unknown)
}

fn is_termux(host: &HostFacts<'_>) -> bool {
    (host.env)("PREFIX").is_some_and(|p| p.starts_with(TERMUX_PREFIX))
        || (host.path_exists)(Path::new(TERMUX_PREFIX))
}

/// Classify `/etc/os-release` contents.
pub fn classify_release(
    release: &str,
    has_command: &dyn Fn(&str) -> bool,
) -> Option<PlatformProfile> {
    let data = release.to_lowercase();

    if data.contains("ubuntu") {
        return Some(PlatformProfile::new(
            PlatformId::Debian,
            "ubuntu",
            PackageManager::Apt,
        ));
    }
    if data.contains("debian") {
        return Some(PlatformProfile::new(
            PlatformId::Debian,
            "debian",
            PackageManager::Apt,
        ));
    }
    if data.contains("arch") {
        return Some(PlatformProfile::new(
            PlatformId::Arch,
            "arch",
            PackageManager::Pacman,
        ));
    }
    if ["fedora", "rhel", "centos", "red hat"]
        .iter()
        .any(|marker| data.contains(marker))
    {
        let manager = if has_command("dnf") {
            PackageManager::Dnf
        } else {
            PackageManager::Yum
        };
        return Some(PlatformProfile::new(PlatformId::Redhat, "redhat", manager));
    }

    None
}

fn detect_package_manager(has_command: &dyn Fn(&str) -> bool) -> Option<PlatformProfile> {
    const MANAGER_BINARIES: &[(&str, PlatformId, &str, PackageManager)] = &[
        ("apt-get", PlatformId::DebianLike, "debian-like", PackageManager::Apt),
        ("pacman", PlatformId::Arch, "arch", PackageManager::Pacman),
        ("dnf", PlatformId::Redhat, "redhat", PackageManager::Dnf),
        ("yum", PlatformId::Redhat, "redhat", PackageManager::Yum),
        ("pkg", PlatformId::Termux, "termux", PackageManager::Pkg),
    ];

    MANAGER_BINARIES
        .iter()
        .find(|(binary, ..)| has_command(binary))
        .map(|(_, platform, distro, manager)| PlatformProfile::new(*platform, distro, *manager))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBUNTU: &str = "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n";
    const DEBIAN: &str = "PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\nID=debian\n";
    const ARCH: &str = "NAME=\"Arch Linux\"\nID=arch\n";
    const FEDORA: &str = "NAME=\"Fedora Linux\"\nID=fedora\n";
    const CENTOS: &str = "NAME=\"CentOS Stream\"\nID=\"centos\"\n";
    const MINT_LIKE: &str = "NAME=\"Pop\"\nID=pop\nID_LIKE=\"debian\"\n";
    const ALPINE: &str = "NAME=\"Alpine Linux\"\nID=alpine\n";

    struct Host {
        prefix: Option<&'static str>,
        termux_dir: bool,
        release: Option<&'static str>,
        commands: &'static [&'static str],
    }

    impl Host {
        fn bare() -> Self {
            Self {
                prefix: None,
                termux_dir: false,
                release: None,
                commands: &[],
            }
        }

        fn resolve(&self) -> PlatformProfile {
            let env = |key: &str| {
                if key == "PREFIX" {
                    self.prefix.map(String::from)
                } else {
                    None
                }
            };
            let read_file = |_: &Path| self.release.map(String::from);
            let path_exists = |_: &Path| self.termux_dir;
            let has_command = |name: &str| self.commands.contains(&name);
            resolve_with(&HostFacts {
                env: &env,
                read_file: &read_file,
                path_exists: &path_exists,
                has_command: &has_command,
            })
        }
    }

    #[test]
    fn release_file_table() {
        let cases: &[(&str, &[&str], PlatformId, &str, PackageManager)] = &[
            (UBUNTU, &[], PlatformId::Debian, "ubuntu", PackageManager::Apt),
            (DEBIAN, &[], PlatformId::Debian, "debian", PackageManager::Apt),
            (ARCH, &[], PlatformId::Arch, "arch", PackageManager::Pacman),
            (FEDORA, &["dnf"], PlatformId::Redhat, "redhat", PackageManager::Dnf),
            (FEDORA, &[], PlatformId::Redhat, "redhat", PackageManager::Yum),
            (CENTOS, &["yum"], PlatformId::Redhat, "redhat", PackageManager::Yum),
            (MINT_LIKE, &[], PlatformId::Debian, "debian", PackageManager::Apt),
        ];

        for (release, commands, platform, distro, manager) in cases {
            let host = Host {
                release: Some(*release),
                commands: *commands,
                ..Host::bare()
            };
            let profile = host.resolve();
            assert_eq!(profile.platform, *platform, "release: {}", release);
            assert_eq!(profile.distro, *distro, "release: {}", release);
            assert_eq!(profile.package_manager, Some(*manager), "release: {}", release);
        }
    }

    #[test]
    fn first_matching_marker_wins() {
        let cases: &[(&str, &[&str], PlatformId, &str, PackageManager)] = &[
            (
                "ID=foo\nID_LIKE=debian\nHOME_URL=\"https://research.example/\"\n",
                &[],
                PlatformId::Debian,
                "debian",
                PackageManager::Apt,
            ),
            (
                "ID=garuda\nID_LIKE=arch\nBUG_REPORT_URL=\"https://fedoraproject.example/\"\n",
                &["dnf"],
                PlatformId::Arch,
                "arch",
                PackageManager::Pacman,
            ),
            (
                "ID=kali\nID_LIKE=debian\nNAME=\"Kali (arch independent)\"\n",
                &[],
                PlatformId::Debian,
                "debian",
                PackageManager::Apt,
            ),
            (
                "ID=rocky\nID_LIKE=\"rhel centos fedora\"\n",
                &["dnf"],
                PlatformId::Redhat,
                "redhat",
                PackageManager::Dnf,
            ),
            (
                "ID=neon\nID_LIKE=\"ubuntu debian\"\nHOME_URL=\"https://research.example/\"\n",
                &[],
                PlatformId::Debian,
                "ubuntu",
                PackageManager::Apt,
            ),
        ];

        for (release, commands, platform, distro, manager) in cases {
            let has_command = |name: &str| commands.contains(&name);
            let profile = classify_release(release, &has_command).unwrap();
            assert_eq!(profile.platform, *platform, "release: {}", release);
            assert_eq!(profile.distro, *distro, "release: {}", release);
            assert_eq!(profile.package_manager, Some(*manager), "release: {}", release);
        }
    }

    #[test]
    fn debian_id_like_is_not_read_as_arch() {
        let release = "ID=foo\nID_LIKE=debian\nHOME_URL=\"https://research.example/\"\n";
        let profile = classify_release(release, &|_| false).unwrap();
        assert_eq!(profile.package_manager, Some(PackageManager::Apt));
    }

    #[test]
    fn ubuntu_with_debian_id_like_is_ubuntu() {
        let profile = Host {
            release: Some(UBUNTU),
            ..Host::bare()
        }
        .resolve();
        assert_eq!(profile.distro, "ubuntu");
    }

    #[test]
    fn termux_prefix_takes_priority_over_release_file() {
        let profile = Host {
            prefix: Some("/data/data/com.termux/files/usr"),
            release: Some(ARCH),
            commands: &["pacman"],
            ..Host::bare()
        }
        .resolve();
        assert_eq!(profile.platform, PlatformId::Termux);
        assert_eq!(profile.package_manager, Some(PackageManager::Pkg));
    }

    #[test]
    fn termux_directory_marker_is_enough() {
        let profile = Host {
            termux_dir: true,
            release: Some(DEBIAN),
            ..Host::bare()
        }
        .resolve();
        assert_eq!(profile.platform, PlatformId::Termux);
    }

    #[test]
    fn unrelated_prefix_is_ignored() {
        let profile = Host {
            prefix: Some("/usr/local"),
            release: Some(DEBIAN),
            ..Host::bare()
        }
        .resolve();
        assert_eq!(profile.platform, PlatformId::Debian);
    }

    #[test]
    fn unmatched_release_falls_back_to_manager_binaries() {
        let profile = Host {
            release: Some(ALPINE),
            commands: &["pacman", "apt-get"],
            ..Host::bare()
        }
        .resolve();
        // apt-get is checked first
        assert_eq!(profile.platform, PlatformId::DebianLike);
        assert_eq!(profile.package_manager, Some(PackageManager::Apt));
    }

    #[test]
    fn manager_binary_order() {
        let cases: &[(&[&str], PlatformId, PackageManager)] = &[
            (&["pacman"], PlatformId::Arch, PackageManager::Pacman),
            (&["dnf", "yum"], PlatformId::Redhat, PackageManager::Dnf),
            (&["yum"], PlatformId::Redhat, PackageManager::Yum),
            (&["pkg"], PlatformId::Termux, PackageManager::Pkg),
        ];
        for (commands, platform, manager) in cases {
            let profile = Host {
                commands: *commands,
                ..Host::bare()
            }
            .resolve();
            assert_eq!(profile.platform, *platform);
            assert_eq!(profile.package_manager, Some(*manager));
        }
    }

    #[test]
    fn nothing_matches_is_unknown() {
        let profile = Host::bare().resolve();
        assert_eq!(profile, PlatformProfile::unknown());
        assert!(profile.install_command.is_empty());
        assert!(profile.update_command.is_empty());
    }

    #[test]
    fn command_templates_follow_manager() {
        let profile = Host {
            release: Some(FEDORA),
            commands: &["dnf"],
            ..Host::bare()
        }
        .resolve();
        assert_eq!(profile.install_command, vec!["dnf", "install", "-y"]);
        assert_eq!(
            profile.update_command,
            vec!["dnf", "makecache", "--refresh", "-y"]
        );
    }

    #[test]
    fn platform_display() {
        assert_eq!(PlatformId::DebianLike.to_string(), "debian-like");
        assert_eq!(PackageManager::Pacman.to_string(), "pacman");
    }
}
