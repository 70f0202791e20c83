//! Unified error types for the Gangway workspace.
//!
//! Variants split into two families: bootstrap errors (everything up to
//! the event subscription) which the binary treats as fatal, and per-event
//! errors which the relay logs and drops.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GangwayError {
    /// The reporting host identity could not be resolved.
    #[error("failed to resolve host identity: {message}")]
    Identity {
        /// Description of the underlying failure.
        message: String,
    },

    /// Connecting to the Docker daemon failed.
    #[error("failed to connect to Docker at {location}: {message}")]
    SourceConnect {
        /// Docker daemon location that was attempted.
        location: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// The Docker daemon version probe failed.
    #[error("failed to fetch Docker daemon version: {message}")]
    SourceProbe {
        /// Description of the underlying failure.
        message: String,
    },

    /// The Riemann location string could not be parsed.
    #[error("invalid Riemann location {location}: {message}")]
    SinkLocation {
        /// The offending location string.
        location: String,
        /// What was wrong with it.
        message: String,
    },

    /// Dialing the Riemann endpoint failed.
    #[error("failed to connect to Riemann at {location}: {source}")]
    SinkDial {
        /// Riemann endpoint that was dialed.
        location: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Submitting an event over the sink transport failed.
    #[error("failed to send event to Riemann: {message}")]
    SinkSend {
        /// Description of the underlying failure.
        message: String,
    },

    /// The Riemann server acknowledged the message with `ok = false`.
    #[error("Riemann rejected event: {message}")]
    SinkRejected {
        /// Error text carried in the acknowledgement, if any.
        message: String,
    },

    /// A runtime event arrived without one of its required fields.
    ///
    /// Recoverable: the relay logs and skips the event.
    #[error("malformed runtime event: missing {field}")]
    MalformedEvent {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The event subscription stream failed or ended.
    ///
    /// Fatal: the source connection is never re-established.
    #[error("event stream failed: {message}")]
    EventStream {
        /// Description of the underlying failure.
        message: String,
    },
}

impl GangwayError {
    /// Whether the relay may log this error and keep processing
    /// subsequent events.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedEvent { .. } | Self::SinkSend { .. } | Self::SinkRejected { .. }
        )
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GangwayError>;
