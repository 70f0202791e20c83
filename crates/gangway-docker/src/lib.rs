//! # gangway-docker
//!
//! Event Source adapter for the Gangway relay.
//!
//! Wraps a [`bollard`] Docker client behind [`client::DockerSource`]:
//! connection over unix socket or TCP, a fail-fast daemon version probe,
//! and a filtered stream of container lifecycle events converted into
//! [`gangway_common::types::RuntimeEvent`] values.

pub mod client;
pub mod event;

pub use client::DockerSource;
