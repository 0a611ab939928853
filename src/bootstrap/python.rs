//! Python interpreter resolver.
//!
//! Probes a fixed list of candidate commands with `--version` and accepts
//! the first one meeting the minimum version. A failed probe (missing
//! executable, non-zero exit, unparseable output) rejects that candidate
//! and moves on; it is never fatal by itself.

use crate::runner::CommandRunner;
use tracing::debug;

/// Minimum interpreter version required by the helloagents package.
pub const MIN_PYTHON: (u32, u32) = (3, 10);

/// Candidates in preference order; the first qualifying one wins.
const CANDIDATES: [&str; 2] = ["python3", "python"];

/// Find the first interpreter on PATH satisfying [`MIN_PYTHON`].
///
/// Returns the command name to invoke, or `None` when no candidate
/// qualifies.
pub fn find_python(runner: &dyn CommandRunner) -> Option<String> {
    for cmd in CANDIDATES {
        match runner.capture(cmd, &["--version"]) {
            Ok(captured) if captured.success => {
                if let Some((major, minor)) = parse_python_version(&captured.stdout) {
                    if meets_minimum(major, minor) {
                        return Some(cmd.to_string());
                    }
                    debug!(cmd, major, minor, "interpreter below minimum version");
                } else {
                    debug!(cmd, output = %captured.stdout.trim(), "unparseable version output");
                }
            }
            Ok(_) => debug!(cmd, "version probe exited non-zero"),
            Err(e) => debug!(cmd, error = %e, "version probe failed to spawn"),
        }
    }
    None
}

/// Extract `(major, minor)` from output like `"Python 3.10.1"`.
fn parse_python_version(output: &str) -> Option<(u32, u32)> {
    let re = regex::Regex::new(r"Python (\d+)\.(\d+)").ok()?;
    let caps = re.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}

fn meets_minimum(major: u32, minor: u32) -> bool {
    (major, minor) >= MIN_PYTHON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::{Reply, ScriptedRunner};

    #[test]
    fn test_parse_python_version() {
        assert_eq!(parse_python_version("Python 3.10.1"), Some((3, 10)));
        assert_eq!(parse_python_version("Python 3.9.0"), Some((3, 9)));
        assert_eq!(parse_python_version("Python 4.0.0"), Some((4, 0)));
        assert_eq!(parse_python_version("not a version"), None);
    }

    #[test]
    fn test_version_boundaries() {
        assert!(!meets_minimum(3, 9));
        assert!(meets_minimum(3, 10));
        assert!(meets_minimum(3, 11));
        assert!(meets_minimum(4, 0));
        assert!(!meets_minimum(2, 7));
    }

    #[test]
    fn first_qualifying_candidate_wins() {
        let runner = ScriptedRunner::new(vec![Reply::Capture {
            success: true,
            stdout: "Python 3.11.4\n",
        }]);
        assert_eq!(find_python(&runner), Some("python3".to_string()));
        // python was never probed once python3 qualified
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn falls_through_to_second_candidate() {
        let runner = ScriptedRunner::new(vec![
            Reply::SpawnError,
            Reply::Capture {
                success: true,
                stdout: "Python 3.12.0",
            },
        ]);
        assert_eq!(find_python(&runner), Some("python".to_string()));
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn too_old_interpreter_is_rejected() {
        let runner = ScriptedRunner::new(vec![
            Reply::Capture {
                success: true,
                stdout: "Python 3.9.0",
            },
            Reply::Capture {
                success: true,
                stdout: "Python 2.7.18",
            },
        ]);
        assert_eq!(find_python(&runner), None);
    }

    #[test]
    fn probe_failures_yield_not_found() {
        let runner = ScriptedRunner::new(vec![
            Reply::SpawnError,
            Reply::Capture {
                success: false,
                stdout: "",
            },
        ]);
        assert_eq!(find_python(&runner), None);
        assert_eq!(runner.call_count(), 2);
    }
}
