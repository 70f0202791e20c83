//! Riemann location parsing.

use std::fmt;

use gangway_common::error::{GangwayError, Result};

/// Transport scheme for the sink connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Length-framed protobuf with acknowledgements.
    Tcp,
    /// Bare datagrams, fire-and-forget.
    Udp,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
        }
    }
}

/// A parsed sink location: scheme plus `host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkLocation {
    /// Transport to dial.
    pub scheme: Scheme,
    /// Endpoint in `host:port` form.
    pub host: String,
}

impl SinkLocation {
    /// Parses a location string of the form `tcp://host:port` or
    /// `udp://host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SinkLocation`] if the scheme separator is
    /// absent, the scheme is not `tcp`/`udp`, or the host part is empty.
    pub fn parse(location: &str) -> Result<Self> {
        let invalid = |message: &str| GangwayError::SinkLocation {
            location: location.to_owned(),
            message: message.to_owned(),
        };

        let (scheme, host) = location
            .split_once("://")
            .ok_or_else(|| invalid("missing scheme"))?;
        let scheme = match scheme {
            "tcp" => Scheme::Tcp,
            "udp" => Scheme::Udp,
            _ => return Err(invalid("unsupported scheme")),
        };
        if host.is_empty() {
            return Err(invalid("empty host"));
        }

        Ok(Self {
            scheme,
            host: host.to_owned(),
        })
    }
}

impl fmt::Display for SinkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}
