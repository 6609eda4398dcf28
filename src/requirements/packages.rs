//! Binary to package name mapping.
//!
//! Most tools ship in a package of the same name. The exceptions are listed
//! in [`PACKAGE_OVERRIDES`]; anything not listed maps to itself.

use super::platform::PackageManager;

/// Explicit `(tool, manager) -> package` overrides.
///
/// A `None` manager applies to every package manager.
pub const PACKAGE_OVERRIDES: &[(&str, Option<PackageManager>, &str)] = &[
    // ndiff is bundled with the nmap package everywhere
    ("ndiff", None, "nmap"),
    ("xsltproc", Some(PackageManager::Pacman), "libxslt"),
    ("xsltproc", Some(PackageManager::Dnf), "libxslt"),
    ("xsltproc", Some(PackageManager::Yum), "libxslt"),
];

/// Package that provides `binary` under `manager`.
pub fn package_for(binary: &str, manager: PackageManager) -> String {
    PACKAGE_OVERRIDES
        .iter()
        .find(|(tool, scope, _)| *tool == binary && scope.is_none_or(|m| m == manager))
        .map(|(_, _, package)| package.to_string())
        .unwrap_or_else(|| binary.to_string())
}

/// Map tools to packages, dropping duplicates while keeping first-seen order.
pub fn packages_for<S: AsRef<str>>(binaries: &[S], manager: PackageManager) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for binary in binaries {
        let package = package_for(binary.as_ref(), manager);
        if !packages.contains(&package) {
            packages.push(package);
        }
    }
    packages
}
