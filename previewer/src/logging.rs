//! Diagnostic tracing for the previewer.
//!
//! Tracing output goes to stderr and is controlled by `RUST_LOG`. Product
//! output (the success line, git stdout, `preview`/`list` text) is printed to
//! stdout by the binary and does not depend on the filter.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Install the stderr subscriber.
///
/// A second call (e.g. from tests) leaves the first subscriber in place.
///
/// # Example
/// ```bash
/// RUST_LOG=previewer=debug previewer update
/// ```
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
