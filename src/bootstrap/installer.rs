//! Pip install of the companion package.
//!
//! Runs `<python> -m pip install --upgrade git+<repo>.git[@branch]` with
//! stdio inherited so the user sees pip's own progress and prompts. A
//! non-zero exit is fatal to the whole bootstrap; there is no retry and
//! no rollback of a partial install.

use crate::bootstrap::channel::Channel;
use crate::runner::CommandRunner;
use anyhow::Result;

/// Build the pip install URL for a channel.
///
/// Non-main channels are pinned with an `@<branch>` suffix; main installs
/// from the repository default.
pub fn install_url(repo_url: &str, channel: Channel) -> String {
    match channel {
        Channel::Main => format!("git+{repo_url}.git"),
        other => format!("git+{repo_url}.git@{}", other.as_str()),
    }
}

/// Install or upgrade the helloagents package from source control.
///
/// Returns `Ok(true)` when pip exited 0; `Ok(false)` on a non-zero exit.
/// A spawn failure (pip module missing, interpreter gone) is an error.
pub fn pip_install(
    runner: &dyn CommandRunner,
    python: &str,
    repo_url: &str,
    channel: Channel,
) -> Result<bool> {
    let url = install_url(repo_url, channel);
    println!(
        "Installing helloagents Python package ({})...",
        channel.as_str()
    );

    let status = runner.run_inherited(python, &["-m", "pip", "install", "--upgrade", &url])?;
    Ok(status == Some(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::{Reply, ScriptedRunner};

    #[test]
    fn main_channel_url_has_no_suffix() {
        assert_eq!(
            install_url("https://github.com/hellowind777/helloagents", Channel::Main),
            "git+https://github.com/hellowind777/helloagents.git"
        );
    }

    #[test]
    fn beta_channel_url_is_branch_pinned() {
        let url = install_url("https://github.com/hellowind777/helloagents", Channel::Beta);
        assert!(url.ends_with("@beta"));
    }

    #[test]
    fn pip_invocation_shape() {
        let runner = ScriptedRunner::new(vec![Reply::Exit(Some(0))]);
        let ok = pip_install(&runner, "python3", "https://example.com/repo", Channel::Beta).unwrap();
        assert!(ok);

        let calls = runner.calls.borrow();
        assert_eq!(calls[0].0, "python3");
        assert_eq!(
            calls[0].1,
            vec![
                "-m",
                "pip",
                "install",
                "--upgrade",
                "git+https://example.com/repo.git@beta"
            ]
        );
    }

    #[test]
    fn nonzero_pip_exit_reports_failure() {
        let runner = ScriptedRunner::new(vec![Reply::Exit(Some(1))]);
        let ok = pip_install(&runner, "python3", "https://example.com/repo", Channel::Main).unwrap();
        assert!(!ok);
    }
}
