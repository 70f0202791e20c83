//! System-wide constants and default endpoints.

/// Default Docker daemon location (local unix socket).
pub const DEFAULT_DOCKER_HOST: &str = "unix:///var/run/docker.sock";

/// Default Riemann service location (local TCP endpoint).
pub const DEFAULT_RIEMANN_HOST: &str = "tcp://localhost:5555";

/// State attached to every outgoing Riemann event.
///
/// Part of the wire contract with existing dashboards; never varies with
/// the lifecycle status being relayed.
pub const EVENT_STATE: &str = "ok";

/// Metric attached to every outgoing Riemann event (always 1, so the
/// sink can count lifecycle transitions by summing).
pub const EVENT_METRIC: i64 = 1;

/// The single tag attached to every outgoing Riemann event.
pub const EVENT_TAG: &str = "docker";

/// Request timeout for Docker daemon calls, in seconds.
pub const DOCKER_TIMEOUT_SECS: u64 = 120;

/// Binary name for the CLI.
pub const BIN_NAME: &str = "gangway";
