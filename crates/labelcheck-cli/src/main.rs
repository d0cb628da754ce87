//! labelcheck entry point.
//!
//! Check the compose files in the current tree:
//! ```bash
//! cargo run -p labelcheck-cli -- -i traefik.
//! ```

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the listing on stdout.
    // RUST_LOG overrides the default warn level.
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    labelcheck_cli::run()
}
