//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with prompts or with the
//! environment dump printed on stdout after a failed write.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for
/// this crate and the default shows warnings only.
pub fn init(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("envcreate=debug")
    } else {
        EnvFilter::new("envcreate=warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
