//! Binary entry point for the HelloAGENTS bootstrap installer.
//!
//! First-time setup only:
//!   helloagents-bootstrap                 # install + interactive menu
//!   helloagents-bootstrap install codex   # install + specify target
//!
//! After installation, use the native `helloagents` command directly.

use helloagents_bootstrap::cli;
use helloagents_bootstrap::commands;
use helloagents_bootstrap::config::BootstrapOptions;
use helloagents_bootstrap::runner::SystemRunner;
use std::process::exit;

fn main() {
    // RUST_LOG-controlled diagnostics on stderr; silent by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = BootstrapOptions::default();
    let invocation = cli::classify(&args, opts.allow_bare_invocation);

    let code = match commands::run(invocation, &opts, &SystemRunner) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    exit(code);
}
