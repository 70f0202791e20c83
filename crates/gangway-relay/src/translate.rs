//! Pure runtime-event-to-monitoring-event translation.

use gangway_common::constants::{EVENT_METRIC, EVENT_STATE, EVENT_TAG};
use gangway_common::types::{MonitoringEvent, RuntimeEvent};

/// Translates one runtime event into the monitoring event delivered to
/// the sink.
///
/// Pure and total: every output field is determined by the input event
/// and the reporting identity alone. The `metric`/`state`/`tags`
/// constants are part of the wire contract with existing dashboards and
/// must not vary with the lifecycle status.
#[must_use]
pub fn translate(event: &RuntimeEvent, identity: &str) -> MonitoringEvent {
    MonitoringEvent {
        description: event.container_id.clone(),
        host: identity.to_owned(),
        service: event.status.clone(),
        metric: EVENT_METRIC,
        state: EVENT_STATE.to_owned(),
        tags: vec![EVENT_TAG.to_owned()],
    }
}
