//! Startup sequence and process lifecycle.
//!
//! Bootstrap is fail-fast with no partial-degradation mode: a relay with
//! only one working connection would silently drop everything, which is
//! strictly worse than refusing to start. Every step returns an error to
//! the single fatal-exit point in `main`.

use std::sync::Arc;

use futures::pin_mut;
use gangway_common::config::RelayConfig;
use gangway_common::error::Result;
use gangway_common::identity::resolve_identity;
use gangway_docker::DockerSource;
use gangway_relay::Dispatcher;
use gangway_riemann::{RiemannClient, SinkLocation};

use crate::cli::Cli;

/// Bootstraps both connections and drives the relay until shutdown.
///
/// # Errors
///
/// Returns an error on identity resolution failure, source connect or
/// probe failure, sink location parse failure, sink dial failure, or a
/// fatal event stream failure. Per-event delivery failures never
/// surface here.
pub async fn run(args: Cli) -> Result<()> {
    let identity = resolve_identity(args.id)?;
    let config = Arc::new(RelayConfig {
        debug: args.debug,
        identity,
        docker: args.docker,
        riemann: args.riemann,
    });

    // Validate the sink location before touching the network; a config
    // typo should not wait on a connection attempt to be reported.
    let sink_location = SinkLocation::parse(&config.riemann)?;

    let source = DockerSource::connect(&config.docker)?;
    let version = source.probe().await?;
    tracing::info!(endpoint = %config.docker, version = %version, "connected to docker");

    let sink = Arc::new(RiemannClient::dial(&sink_location).await?);
    tracing::info!(endpoint = %sink_location, "connected to riemann");

    let dispatcher = Dispatcher::new(Arc::clone(&config), Arc::clone(&sink));
    let events = source.subscribe();
    pin_mut!(events);

    tracing::info!(host = %config.identity, "relaying container lifecycle events");
    let outcome = gangway_relay::run(events, &dispatcher, shutdown_signal()).await;

    // Release the sink on the way out, for both the signal path and a
    // fatal stream failure.
    if let Err(err) = sink.close().await {
        tracing::warn!(error = %err, "failed to close riemann connection");
    }

    outcome
}

/// Resolves when the process receives an interrupt signal.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
}
