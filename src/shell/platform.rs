//! Process privilege and CI detection.

/// Variables set by common CI services.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Whether a CI service is driving this process. Menus and dialoguer
/// prompts are never shown there.
pub fn is_ci() -> bool {
    ci_marker_set(|name| std::env::var_os(name).is_some())
}

fn ci_marker_set(is_set: impl Fn(&str) -> bool) -> bool {
    CI_MARKERS.iter().any(|name| is_set(name))
}

/// Check if running as root.
///
/// Privileged scan profiles skip the escalation prefix and the installer
/// skips its escalated retry when this is true.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
