//! Shared plumbing for the `spell`, `bigspell`, and `benchmark` binaries.
//!
//! Out of the correction engine's scope ("file I/O error reporting,
//! argument parsing, logging" for the front-ends), but still real:
//! `tracing-subscriber` initialisation lives here so all three binaries
//! share one setup path instead of copy-pasting it three times.

use tracing_subscriber::EnvFilter;

/// Install a `tracing-subscriber` `fmt` subscriber reading its filter from
/// `RUST_LOG`, defaulting to `warn` so a plain `spell < input.txt` run
/// stays quiet on stdout/stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
