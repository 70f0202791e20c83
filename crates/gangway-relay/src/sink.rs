//! The delivery seam between the dispatcher and the sink transport.

use async_trait::async_trait;
use gangway_common::error::Result;
use gangway_common::types::MonitoringEvent;
use gangway_riemann::RiemannClient;

/// Anything events can be submitted to.
///
/// The dispatcher is generic over this trait so delivery behavior can be
/// tested against stub sinks without a live transport.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Submits one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission does not reach the sink; the
    /// caller decides whether to drop or abort.
    async fn submit(&self, event: &MonitoringEvent) -> Result<()>;
}

#[async_trait]
impl EventSink for RiemannClient {
    async fn submit(&self, event: &MonitoringEvent) -> Result<()> {
        self.send(event).await
    }
}
