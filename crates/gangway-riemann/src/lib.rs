//! # gangway-riemann
//!
//! Event Sink adapter for the Gangway relay.
//!
//! Speaks the Riemann wire protocol: protobuf `Msg` payloads, framed with
//! a 4-byte big-endian length prefix over TCP (with acknowledgement), or
//! sent as bare datagrams over UDP (fire-and-forget).

pub mod client;
pub mod location;
pub mod proto;

pub use client::RiemannClient;
pub use location::{Scheme, SinkLocation};
