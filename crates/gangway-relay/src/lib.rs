//! # gangway-relay
//!
//! The relay core: a pure translation from runtime lifecycle events to
//! monitoring events, a best-effort delivery dispatcher, and the
//! subscription loop that drives both until shutdown.
//!
//! Delivery is explicitly at-most-once: a failed submission is logged
//! and the event dropped, with no retry, queueing, or backpressure.

pub mod dispatch;
pub mod run;
pub mod sink;
pub mod translate;

pub use dispatch::Dispatcher;
pub use run::run;
pub use sink::EventSink;
pub use translate::translate;
