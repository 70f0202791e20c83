//! Domain event types flowing through the relay.

use serde::{Deserialize, Serialize};

/// A container lifecycle notification as observed on the Docker event
/// stream, reduced to the fields the relay needs.
///
/// Produced by the source adapter; read-only input to translation. Any
/// event missing one of these fields is rejected at conversion time and
/// never reaches the translator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeEvent {
    /// Identifier of the container the event refers to.
    pub container_id: String,
    /// Lifecycle status, e.g. `create`, `start`, `die`, `destroy`.
    pub status: String,
    /// Unix timestamp (seconds) at which the daemon emitted the event.
    pub timestamp: i64,
}

/// The fixed-shape record delivered to Riemann, one per runtime event.
///
/// A pure value object: every field is fully determined by the relay
/// configuration and the single triggering [`RuntimeEvent`]. `metric`,
/// `state`, and `tags` are constants of the wire contract and never vary
/// with the lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringEvent {
    /// Container identifier.
    pub description: String,
    /// Reporting host identity.
    pub host: String,
    /// Lifecycle status the event describes.
    pub service: String,
    /// Always 1.
    pub metric: i64,
    /// Always `"ok"`.
    pub state: String,
    /// Always the single tag `"docker"`.
    pub tags: Vec<String>,
}
