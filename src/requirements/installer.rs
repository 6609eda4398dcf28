//! Dependency installation at startup.
//!
//! Makes sure the scanner tool chain is on `PATH`, installing missing
//! tools through the host package manager when possible:
//!
//! 1. All tools present: done, nothing is run.
//! 2. Resolve the platform; no package manager is fatal.
//! 3. Refresh the package index (best effort).
//! 4. Install every missing package in one command, unprivileged.
//! 5. If tools are still missing and the process is not elevated, retry
//!    once through the escalation command.
//! 6. Anything still missing is fatal and comes with manual instructions.

use crate::error::{RedeyeError, Result};
use crate::requirements::locator::{ToolLocator, ToolReport};
use crate::requirements::packages::packages_for;
use crate::requirements::platform::{self, PackageManager, PlatformProfile};
use crate::shell::{display_command, is_elevated, CommandOptions, ProcessRunner};
use crate::ui::UserInterface;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Runs update and install commands.
    pub runner: &'a dyn ProcessRunner,
    /// Check which of the given tools are on `PATH`.
    pub check: &'a dyn Fn(&[String]) -> ToolReport,
    /// Classify the host.
    pub resolve_platform: &'a dyn Fn() -> PlatformProfile,
    /// Whether the process already runs with root privileges.
    pub elevated: bool,
    /// Privilege escalation program (e.g. `sudo`).
    pub escalation: &'a str,
    /// When false, missing tools are reported but nothing is installed.
    pub auto_install: bool,
}

impl<'a> InstallerContext<'a> {
    /// Production context over the real host.
    pub fn system(runner: &'a dyn ProcessRunner, escalation: &'a str, auto_install: bool) -> Self {
        Self {
            runner,
            check: &check_path,
            resolve_platform: &platform::resolve,
            elevated: is_elevated(),
            escalation,
            auto_install,
        }
    }
}

fn check_path(tools: &[String]) -> ToolReport {
    ToolLocator::from_env().check(tools)
}

/// Privilege level of one install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeTier {
    /// Run the package manager as the current user.
    Unprivileged,
    /// Run the package manager through the escalation command.
    Escalated,
}

/// Install attempts to make, in order.
///
/// Each tier is tried at most once. An elevated process gains nothing
/// from escalation, so it only gets the first attempt.
pub fn attempt_tiers(elevated: bool) -> &'static [PrivilegeTier] {
    if elevated {
        &[PrivilegeTier::Unprivileged]
    } else {
        &[PrivilegeTier::Unprivileged, PrivilegeTier::Escalated]
    }
}

/// Make sure every tool in `required` is available.
///
/// On failure the error and manual installation instructions have already
/// been shown through `ui`.
pub fn ensure(
    required: &[String],
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    ui.message(&format!("Checking required tools: {}", required.join(", ")));
    let report = (ctx.check)(required);
    if report.all_present() {
        ui.success(&format!(
            "All required tools are present: {}",
            report.found_names().join(", ")
        ));
        return Ok(());
    }

    ui.warning(&format!("Missing tools: {}", report.missing.join(", ")));

    let profile = (ctx.resolve_platform)();
    ui.message(&format!(
        "Detected OS: {}, package manager: {}",
        profile.distro,
        profile
            .package_manager
            .map(|m| m.id())
            .unwrap_or("none")
    ));

    if !ctx.auto_install {
        ui.warning("Automatic installation is disabled (auto_install: false)");
        let err = RedeyeError::StillMissing {
            tools: report.missing,
        };
        return Err(report_failure(ui, profile.package_manager, err));
    }

    let Some(manager) = profile.package_manager else {
        return Err(report_failure(ui, None, RedeyeError::NoPackageManager));
    };

    refresh_index(&profile, ui, ctx);

    let packages = packages_for(&report.missing, manager);
    let mut install = profile.install_command.clone();
    install.extend(packages);

    let mut missing = report.missing;
    for tier in attempt_tiers(ctx.elevated) {
        let argv = match tier {
            PrivilegeTier::Unprivileged => install.clone(),
            PrivilegeTier::Escalated => {
                let mut argv = vec![ctx.escalation.to_string()];
                argv.extend(install.iter().cloned());
                argv
            }
        };

        ui.message(&format!("Trying install: {}", display_command(&argv)));
        match ctx.runner.run(&argv, &CommandOptions::captured()) {
            Ok(result) if result.success => {
                tracing::debug!("Install finished ({:?}), re-checking tools", tier);
            }
            Ok(result) => ui.warning(&format!(
                "Install returned {}: {}",
                result
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                result.stderr
            )),
            Err(e) => ui.warning(&format!("Install could not run: {}", e)),
        }

        missing = (ctx.check)(required).missing;
        if missing.is_empty() {
            ui.success("All tools installed successfully");
            return Ok(());
        }
    }

    if ctx.elevated {
        ui.message("Already running as root; the install above did not provide every tool");
    }

    let err = RedeyeError::StillMissing { tools: missing };
    Err(report_failure(ui, Some(manager), err))
}

fn refresh_index(profile: &PlatformProfile, ui: &mut dyn UserInterface, ctx: &InstallerContext<'_>) {
    if profile.update_command.is_empty() {
        return;
    }

    let shown = display_command(&profile.update_command);
    let mut spinner = ui.start_spinner(&format!("Running update: {}", shown));
    match ctx
        .runner
        .run(&profile.update_command, &CommandOptions::captured())
    {
        Ok(result) if result.success => {
            spinner.finish_success("Package index refreshed");
            if ui.output_mode().shows_command_output() && !result.stdout.is_empty() {
                ui.message(&result.stdout);
            }
        }
        Ok(result) => {
            spinner.finish_error("Package index refresh failed");
            ui.warning(&format!(
                "Update command returned {:?}; continuing. {}",
                result.exit_code, result.stderr
            ));
        }
        Err(e) => {
            spinner.finish_error("Package index refresh failed");
            ui.warning(&format!("Update command could not run; continuing. {}", e));
        }
    }
}

fn report_failure(
    ui: &mut dyn UserInterface,
    manager: Option<PackageManager>,
    err: RedeyeError,
) -> RedeyeError {
    ui.error(&err.to_string());
    ui.message("");
    ui.message("=== Manual installation suggestions ===");
    for line in manual_instructions(manager) {
        ui.message(&line);
    }
    err
}

/// Platform specific manual installation text.
pub fn manual_instructions(manager: Option<PackageManager>) -> Vec<String> {
    let mut lines: Vec<String> = match manager {
        Some(PackageManager::Apt) => vec![
            "Debian/Ubuntu (APT):".into(),
            "  sudo apt-get update".into(),
            "  sudo apt-get install -y nmap ndiff xsltproc".into(),
            "  (ndiff usually included with nmap; if not, search 'apt-cache search ndiff')".into(),
        ],
        Some(PackageManager::Pkg) => vec![
            "Termux (pkg):".into(),
            "  pkg update".into(),
            "  pkg install nmap libxslt".into(),
            "  (ndiff usually comes with nmap)".into(),
        ],
        Some(PackageManager::Pacman) => vec![
            "Arch (pacman):".into(),
            "  sudo pacman -Sy".into(),
            "  sudo pacman -S nmap libxslt".into(),
            "  (ndiff usually part of nmap package)".into(),
        ],
        Some(m @ (PackageManager::Dnf | PackageManager::Yum)) => vec![
            "Fedora/RHEL (dnf/yum):".into(),
            format!("  sudo {} makecache --refresh", m.id()),
            format!("  sudo {} install -y nmap libxslt", m.id()),
            "  (ndiff usually comes with nmap)".into(),
        ],
        None => vec!["Unknown package manager. Try installing: nmap, libxslt (xsltproc).".into()],
    };
    lines.push(
        "If you are inside a container or don't have privileges, contact the sysadmin \
         or use a container that has these tools."
            .into(),
    );
    lines
}
