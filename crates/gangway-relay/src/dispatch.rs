//! Per-event delivery dispatch.

use std::sync::Arc;

use gangway_common::config::RelayConfig;
use gangway_common::types::RuntimeEvent;

use crate::sink::EventSink;
use crate::translate::translate;

/// Translates and submits one runtime event per invocation.
///
/// Carries the immutable configuration and the shared sink handle as an
/// explicit context struct, so every dispatch sees the same read-only
/// state. Delivery is at-most-once: a failed submission is logged with
/// its error detail and the event dropped; the failure never propagates
/// and leaves no residual state behind for the next dispatch.
pub struct Dispatcher<S> {
    config: Arc<RelayConfig>,
    sink: Arc<S>,
}

impl<S: EventSink> Dispatcher<S> {
    /// Creates a dispatcher bound to the given configuration and sink.
    #[must_use]
    pub fn new(config: Arc<RelayConfig>, sink: Arc<S>) -> Self {
        Self { config, sink }
    }

    /// Dispatches one runtime event.
    ///
    /// In debug mode the full translated event is logged before the
    /// submission attempt.
    pub async fn dispatch(&self, event: &RuntimeEvent) {
        let outgoing = translate(event, &self.config.identity);

        if self.config.debug {
            tracing::info!(event = ?outgoing, "sending event");
        }

        if let Err(err) = self.sink.submit(&outgoing).await {
            tracing::warn!(
                container = %event.container_id,
                status = %event.status,
                error = %err,
                "dropping event after failed delivery"
            );
        }
    }
}
