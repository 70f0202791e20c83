//! Reporting-identity resolution.
//!
//! The identity is attached to every outgoing event as its originating
//! host, so failing to resolve one is a fatal bootstrap condition.

use crate::error::{GangwayError, Result};

/// Resolves the reporting host identity.
///
/// An explicit identity is returned unchanged without touching the
/// system; otherwise the local hostname is queried.
///
/// # Errors
///
/// Returns [`GangwayError::Identity`] if no explicit identity was given
/// and the hostname lookup fails or yields non-UTF-8 data.
pub fn resolve_identity(explicit: Option<String>) -> Result<String> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    let hostname = nix::unistd::gethostname().map_err(|err| GangwayError::Identity {
        message: err.to_string(),
    })?;
    hostname.into_string().map_err(|_| GangwayError::Identity {
        message: "hostname is not valid UTF-8".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_identity_is_returned_unchanged() {
        let id = resolve_identity(Some("host-x".to_owned())).expect("should resolve");
        assert_eq!(id, "host-x");
    }

    #[test]
    fn missing_identity_falls_back_to_hostname() {
        let id = resolve_identity(None).expect("should resolve");
        assert!(!id.is_empty());
    }
}
