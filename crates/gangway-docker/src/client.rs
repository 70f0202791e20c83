//! Docker daemon connection and event subscription.

use bollard::Docker;
use bollard::system::EventsOptions;
use futures::{Stream, StreamExt};
use gangway_common::constants::DOCKER_TIMEOUT_SECS;
use gangway_common::error::{GangwayError, Result};
use gangway_common::types::RuntimeEvent;

use crate::event::runtime_event_from;

/// Handle to one Docker daemon, owning the event subscription.
///
/// Lives from successful bootstrap until process exit; the connection is
/// never re-established automatically.
#[derive(Debug, Clone)]
pub struct DockerSource {
    inner: Docker,
    location: String,
}

impl DockerSource {
    /// Connects to the Docker daemon at `location`.
    ///
    /// `unix://` locations are dialed over the local socket; anything
    /// else is treated as an HTTP endpoint (`tcp://host:port`).
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SourceConnect`] if the client cannot be
    /// constructed for the given location.
    pub fn connect(location: &str) -> Result<Self> {
        let inner = if location.starts_with("unix://") {
            Docker::connect_with_unix(location, DOCKER_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
        } else {
            Docker::connect_with_http(location, DOCKER_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
        }
        .map_err(|err| GangwayError::SourceConnect {
            location: location.to_owned(),
            message: err.to_string(),
        })?;

        Ok(Self {
            inner,
            location: location.to_owned(),
        })
    }

    /// Issues the daemon version probe, returning the reported version.
    ///
    /// This is the first round trip on the connection, so it doubles as
    /// the reachability check for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SourceProbe`] if the daemon cannot be
    /// reached or the version call fails.
    pub async fn probe(&self) -> Result<String> {
        let version = self
            .inner
            .version()
            .await
            .map_err(|err| GangwayError::SourceProbe {
                message: err.to_string(),
            })?;
        Ok(version.version.unwrap_or_else(|| "unknown".to_owned()))
    }

    /// The location this source was connected to.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Subscribes to container lifecycle events.
    ///
    /// The subscription is filtered to container-type events on the
    /// daemon side. Each item is either a converted [`RuntimeEvent`], a
    /// recoverable [`GangwayError::MalformedEvent`] for payloads missing
    /// a required field, or a fatal [`GangwayError::EventStream`] for
    /// transport failures.
    pub fn subscribe(&self) -> impl Stream<Item = Result<RuntimeEvent>> + '_ {
        let mut options = EventsOptions::<String>::default();
        let _ = options
            .filters
            .insert("type".to_owned(), vec!["container".to_owned()]);

        tracing::debug!(endpoint = %self.location, "subscribing to container events");
        self.inner.events(Some(options)).map(|item| match item {
            Ok(message) => runtime_event_from(message),
            Err(err) => Err(GangwayError::EventStream {
                message: err.to_string(),
            }),
        })
    }
}
