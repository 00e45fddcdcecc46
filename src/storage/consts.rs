use std::time::Duration;

/// How often idle sessions are looked for.
pub const EVICTION_PERIOD: Duration = Duration::from_secs(60);

pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
