//! Riemann protobuf message definitions.
//!
//! Hand-declared prost messages matching the server's `proto2` schema
//! (`riemann.proto`). Only the messages the relay exchanges are declared;
//! unknown fields in server replies are skipped by prost during decode.

use gangway_common::constants::{EVENT_METRIC, EVENT_STATE, EVENT_TAG};
use gangway_common::types::MonitoringEvent;

/// A single key/value attribute on an event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Attribute {
    /// Attribute key.
    #[prost(string, optional, tag = "1")]
    pub key: Option<String>,
    /// Attribute value.
    #[prost(string, optional, tag = "2")]
    pub value: Option<String>,
}

/// A Riemann event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Event {
    /// Event time as unix seconds.
    #[prost(int64, optional, tag = "1")]
    pub time: Option<i64>,
    /// Event state, e.g. `ok`.
    #[prost(string, optional, tag = "2")]
    pub state: Option<String>,
    /// Service the event belongs to.
    #[prost(string, optional, tag = "3")]
    pub service: Option<String>,
    /// Originating host.
    #[prost(string, optional, tag = "4")]
    pub host: Option<String>,
    /// Free-form description.
    #[prost(string, optional, tag = "5")]
    pub description: Option<String>,
    /// Event tags.
    #[prost(string, repeated, tag = "7")]
    pub tags: Vec<String>,
    /// Time-to-live in seconds.
    #[prost(float, optional, tag = "8")]
    pub ttl: Option<f32>,
    /// Custom attributes.
    #[prost(message, repeated, tag = "9")]
    pub attributes: Vec<Attribute>,
    /// Event time as unix microseconds.
    #[prost(int64, optional, tag = "10")]
    pub time_micros: Option<i64>,
    /// Integer metric.
    #[prost(sint64, optional, tag = "13")]
    pub metric_sint64: Option<i64>,
    /// Double metric.
    #[prost(double, optional, tag = "14")]
    pub metric_d: Option<f64>,
    /// Float metric.
    #[prost(float, optional, tag = "15")]
    pub metric_f: Option<f32>,
}

/// Top-level wire message, in both directions.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Msg {
    /// Acknowledgement flag on server replies.
    #[prost(bool, optional, tag = "2")]
    pub ok: Option<bool>,
    /// Error text on negative acknowledgements.
    #[prost(string, optional, tag = "3")]
    pub error: Option<String>,
    /// Events carried by a client submission.
    #[prost(message, repeated, tag = "6")]
    pub events: Vec<Event>,
}

impl From<&MonitoringEvent> for Event {
    fn from(event: &MonitoringEvent) -> Self {
        // Integer metrics go out on both fields, as Riemann clients
        // conventionally do; the server reads the sint64 one.
        #[allow(clippy::cast_precision_loss)]
        let metric_f = event.metric as f32;
        Self {
            state: Some(event.state.clone()),
            service: Some(event.service.clone()),
            host: Some(event.host.clone()),
            description: Some(event.description.clone()),
            tags: event.tags.clone(),
            metric_sint64: Some(event.metric),
            metric_f: Some(metric_f),
            ..Self::default()
        }
    }
}
