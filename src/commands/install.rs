//! The bootstrap flow: resolve interpreter, install the package, forward
//! the argument vector, relay the exit status.

use crate::bootstrap::channel::default_manifest_path;
use crate::bootstrap::{detect_channel, find_python, pip_install};
use crate::cli::{Invocation, print_usage};
use crate::config::BootstrapOptions;
use crate::runner::CommandRunner;
use anyhow::Result;
use tracing::debug;

/// Run one bootstrap invocation; the returned code becomes the process
/// exit status.
pub fn run(
    invocation: Invocation,
    opts: &BootstrapOptions,
    runner: &dyn CommandRunner,
) -> Result<i32> {
    // Help never spawns anything.
    let forwarded = match invocation {
        Invocation::Help => {
            print_usage();
            return Ok(0);
        }
        Invocation::Menu => Vec::new(),
        Invocation::Forward(args) => args,
    };

    let Some(python) = find_python(runner) else {
        eprintln!("Error: Python >= 3.10 not found.");
        eprintln!("Please install Python first: https://www.python.org/downloads/");
        return Ok(1);
    };
    debug!(%python, "resolved interpreter");

    let channel = match &opts.manifest_path {
        Some(path) => detect_channel(path),
        None => detect_channel(&default_manifest_path()),
    };

    if !pip_install(runner, &python, &opts.repo_url, channel)? {
        eprintln!("Failed to install helloagents Python package.");
        return Ok(1);
    }

    let status = forward(runner, &python, &forwarded)?;

    if should_print_hint(status) {
        println!();
        println!("{}", next_steps_hint());
    }

    Ok(status.unwrap_or(1))
}

/// Invoke the installed package's module entry point with inherited stdio.
fn forward(runner: &dyn CommandRunner, python: &str, args: &[String]) -> Result<Option<i32>> {
    let mut argv: Vec<&str> = vec!["-m", "helloagents"];
    argv.extend(args.iter().map(String::as_str));
    runner.run_inherited(python, &argv)
}

/// The next-steps block is only shown after a clean forwarded run.
fn should_print_hint(status: Option<i32>) -> bool {
    status == Some(0)
}

fn next_steps_hint() -> &'static str {
    "Done! From now on, use the native command directly:\n\
     \x20 helloagents update          # update to latest version\n\
     \x20 helloagents uninstall codex # uninstall from a CLI\n\
     \x20 helloagents status          # check installation status"
}
