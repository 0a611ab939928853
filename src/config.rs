//! Bootstrap options.
//!
//! One policy struct instead of the two historical argument-handling
//! variants: `allow_bare_invocation` selects between the permissive
//! entry point (bare invocation opens the interactive menu) and the
//! strict one (an explicit `install` is required).

use std::path::PathBuf;

/// Source repository the companion package is installed from.
pub const REPO_URL: &str = "https://github.com/hellowind777/helloagents";

/// Options controlling a single bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// When true, invoking with no arguments forwards an empty argument
    /// vector so the installed package presents its interactive menu.
    /// When false, bare invocation prints usage instead.
    pub allow_bare_invocation: bool,
    /// Git repository the pip install pulls from.
    pub repo_url: String,
    /// Manifest to read the release channel from. `None` means the
    /// `package.json` next to the current executable.
    pub manifest_path: Option<PathBuf>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            allow_bare_invocation: true,
            repo_url: REPO_URL.to_string(),
            manifest_path: None,
        }
    }
}
