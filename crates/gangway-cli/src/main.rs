//! # gangway — Docker-to-Riemann event relay
//!
//! Subscribes to container lifecycle events on a Docker daemon and
//! relays each one as a structured event to a Riemann server.

mod bootstrap;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Cli::parse();

    // The single fatal-exit point: every bootstrap or stream failure
    // surfaces here as an error, is logged, and terminates the process.
    if let Err(err) = bootstrap::run(args).await {
        tracing::error!(error = %err, "fatal");
        std::process::exit(1);
    }
}
