//! Command-line surface.

use clap::Parser;

/// Gangway — relay Docker container lifecycle events to Riemann.
#[derive(Parser, Debug)]
#[command(name = gangway_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Log every outgoing Riemann event in full before sending it.
    #[arg(long)]
    pub debug: bool,

    /// Identifier used as the originating host on Riemann events
    /// (defaults to the system hostname).
    #[arg(long)]
    pub id: Option<String>,

    /// Docker daemon location.
    #[arg(long, default_value = gangway_common::constants::DEFAULT_DOCKER_HOST)]
    pub docker: String,

    /// Riemann service location.
    #[arg(long, default_value = gangway_common::constants::DEFAULT_RIEMANN_HOST)]
    pub riemann: String,
}
