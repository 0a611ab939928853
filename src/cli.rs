//! CLI front-end: argument classification and usage text.
//!
//! Only `install [args...]` and (under the permissive policy) a bare
//! invocation are supported. Everything else, including `--help`, prints
//! the usage text and exits 0 — usage violations are treated as help
//! requests, not errors, and spawn no child processes.

use clap::{Parser, Subcommand};

/// What a given argument vector asks the bootstrap to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Forward an empty argument vector; the installed package shows its
    /// interactive menu.
    Menu,
    /// Forward `install` plus its trailing arguments unchanged.
    Forward(Vec<String>),
    /// Print usage and exit 0 without side effects.
    Help,
}

#[derive(Debug, Parser)]
#[command(
    name = "helloagents-bootstrap",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// First-time install, optionally targeting a specific CLI.
    #[command(disable_help_flag = true)]
    Install {
        /// Passed through verbatim, hyphens included (`--all`, `codex`, ...).
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Classify the raw argument vector (without the program name).
pub fn classify(args: &[String], allow_bare_invocation: bool) -> Invocation {
    // clap wants argv[0] present
    let argv = std::iter::once("helloagents-bootstrap".to_string()).chain(args.iter().cloned());

    match Cli::try_parse_from(argv) {
        Ok(Cli { command: None }) => {
            if allow_bare_invocation {
                Invocation::Menu
            } else {
                Invocation::Help
            }
        }
        Ok(Cli {
            command: Some(Commands::Install { args }),
        }) => {
            let mut forwarded = vec!["install".to_string()];
            forwarded.extend(args);
            Invocation::Forward(forwarded)
        }
        // Unknown subcommand, stray flag, anything clap rejects: help, not error.
        Err(_) => Invocation::Help,
    }
}

pub fn usage_text() -> String {
    [
        "HelloAGENTS bootstrap installer",
        "",
        "Usage (first-time install only):",
        "  helloagents-bootstrap                 # interactive menu",
        "  helloagents-bootstrap install codex   # specify target directly",
        "  helloagents-bootstrap install --all   # install to all detected CLIs",
        "",
        "After installation, use the native command directly:",
        "  helloagents update",
        "  helloagents uninstall <target>",
        "  helloagents status",
        "  helloagents version",
    ]
    .join("\n")
}

pub fn print_usage() {
    println!("{}", usage_text());
}
