//! Child-process execution seam.
//!
//! Every shell-out in the bootstrap goes through [`CommandRunner`]: version
//! probes capture stdout, while pip and the forwarded package run with
//! inherited stdio so the user sees live output and prompts. Keeping the
//! seam narrow makes the process sequencing and exit statuses scriptable
//! in tests.

use anyhow::{Context, Result};
use std::process::Command;

/// Output of a captured child process.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Whether the child exited with status 0.
    pub success: bool,
    /// Everything the child wrote to stdout, lossily decoded.
    pub stdout: String,
}

/// Runs external commands on behalf of the bootstrap flow.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout. A spawn failure is an
    /// error; a non-zero exit is a normal result with `success == false`.
    fn capture(&self, program: &str, args: &[&str]) -> Result<Captured>;

    /// Run `program` with `args`, stdio inherited from this process.
    /// Returns the child's exit code, or `None` if it was terminated by a
    /// signal and has no code.
    fn run_inherited(&self, program: &str, args: &[&str]) -> Result<Option<i32>>;
}

/// The real runner, backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[&str]) -> Result<Captured> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute: {} {}", program, args.join(" ")))?;

        Ok(Captured {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn run_inherited(&self, program: &str, args: &[&str]) -> Result<Option<i32>> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute: {} {}", program, args.join(" ")))?;

        Ok(status.code())
    }
}
