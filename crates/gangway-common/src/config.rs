//! Global configuration model for the Gangway relay.

use serde::{Deserialize, Serialize};

/// Root configuration for a relay process.
///
/// Built once from the command line at startup, then shared read-only
/// (behind an `Arc`) with every dispatch invocation. Nothing mutates it
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Whether every outgoing event is logged in full before sending.
    pub debug: bool,
    /// Identifier used as the originating host on every outgoing event.
    pub identity: String,
    /// Docker daemon location (`unix://` path or `tcp://` endpoint).
    pub docker: String,
    /// Riemann service location (`tcp://` or `udp://` endpoint).
    pub riemann: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            debug: false,
            identity: String::new(),
            docker: crate::constants::DEFAULT_DOCKER_HOST.to_owned(),
            riemann: crate::constants::DEFAULT_RIEMANN_HOST.to_owned(),
        }
    }
}
