//! Bootstrap machinery: interpreter resolution, release-channel detection,
//! and the pip install itself. Each step is a sequential child-process
//! invocation; nothing here persists state between runs.

pub mod channel;
pub mod installer;
pub mod python;

pub use channel::{Channel, detect_channel};
pub use installer::{install_url, pip_install};
pub use python::find_python;
