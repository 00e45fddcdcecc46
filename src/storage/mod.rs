use crate::cli::Args;
use consts::EVICTION_PERIOD;
use interface::SessionRepo;
use sessions::HashMapSessionsStorage;
use std::time::Duration;

pub mod consts;
pub mod interface;
pub mod sessions;

/// Periodically drops sessions nobody has touched for `--session-idle-timeout` seconds, along
/// with their map widgets.
pub fn init(args: &Args, sessions: HashMapSessionsStorage) {
    let max_idle = Duration::from_secs(args.session_idle_timeout);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EVICTION_PERIOD);
        loop {
            interval.tick().await;
            let evicted = sessions.evict_idle(max_idle).await;
            if evicted > 0 {
                let remaining = sessions.count().await;
                tracing::info!(
                    task = "session_eviction",
                    evicted,
                    remaining,
                    "Evicted idle sessions."
                );
            }
        }
    });
}
