//! Conversion from the daemon's event payload to [`RuntimeEvent`].
//!
//! The daemon payload is loosely shaped (every field optional); the relay
//! works on a fixed-shape record instead. A payload missing any required
//! field is rejected here with a recoverable error rather than crashing a
//! dispatch later on.

use bollard::models::EventMessage;
use gangway_common::error::{GangwayError, Result};
use gangway_common::types::RuntimeEvent;

/// Converts one daemon event payload into a [`RuntimeEvent`].
///
/// # Errors
///
/// Returns [`GangwayError::MalformedEvent`] naming the first missing
/// required field (`Actor`, `Actor.ID`, `Action`, or `time`).
pub fn runtime_event_from(message: EventMessage) -> Result<RuntimeEvent> {
    let actor = message
        .actor
        .ok_or(GangwayError::MalformedEvent { field: "Actor" })?;
    let container_id = actor
        .id
        .ok_or(GangwayError::MalformedEvent { field: "Actor.ID" })?;
    let status = message
        .action
        .ok_or(GangwayError::MalformedEvent { field: "Action" })?;
    let timestamp = message
        .time
        .ok_or(GangwayError::MalformedEvent { field: "time" })?;

    Ok(RuntimeEvent {
        container_id,
        status,
        timestamp,
    })
}
