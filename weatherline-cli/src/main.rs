//! Binary crate for the `weatherline` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Printing the assembled weather line

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cmd = cli::Cli::parse();
    cmd.run().await
}

/// Logs go to stderr so stdout only ever carries the weather line.
///
/// `RUST_LOG` overrides the default of warnings only, e.g.
/// `RUST_LOG=weatherline_core=debug`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weatherline_cli=warn,weatherline_core=warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_installs_global_subscriber() {
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
