//! RedEye CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use redeye::cli::{Cli, CommandDispatcher};
use redeye::shell::is_ci;
use redeye::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so they never mix with scan output. `--debug` forces
/// `redeye=debug`; otherwise `RUST_LOG` applies, defaulting to info.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("redeye=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("redeye=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print the cancel message and leave with status 0 on Ctrl-C.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let term = console::Term::stdout();
        let _ = term.show_cursor();
        let _ = term.write_line("");
        let _ = term.write_line("Operation cancelled by user. Exiting RedEye.");
        std::process::exit(0);
    });
    if let Err(e) = result {
        tracing::debug!("Could not install interrupt handler: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Parsed arguments: {:?}", cli);

    let output_mode = match (cli.quiet, cli.verbose) {
        (true, _) => OutputMode::Quiet,
        (_, true) => OutputMode::Verbose,
        _ => OutputMode::Normal,
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    install_interrupt_handler();

    let cwd = std::env::current_dir().unwrap_or_default();
    let mut ui = create_ui(!is_ci(), output_mode);
    let dispatcher = CommandDispatcher::new(cwd);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.hint() {
                ui.show_hint(hint);
            }
            ExitCode::from(1)
        }
    }
}
