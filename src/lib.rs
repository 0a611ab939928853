//! First-run bootstrap installer for the HelloAGENTS Python package.
//!
//! This binary exists only for initial setup: it finds a suitable Python,
//! pip-installs the `helloagents` package from git, and forwards the CLI
//! arguments to `python -m helloagents`. All subsequent operations (update,
//! uninstall, status) go through the native `helloagents` command directly.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod runner;
