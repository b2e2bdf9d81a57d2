//! Background eviction of idle editor sessions.

use std::sync::Arc;
use std::time::Duration;

use metrics::gauge;
use tokio::time::{self, MissedTickBehavior};

use crate::application::services::EditorService;

/// How often to sweep for a given idle TTL: a tenth of it, clamped to
/// between 1 second and 5 minutes.
pub fn sweep_interval(ttl: Duration) -> Duration {
    (ttl / 10).clamp(Duration::from_secs(1), Duration::from_secs(300))
}

/// Evicts sessions idle for at least `ttl`, forever.
///
/// Spawned once by [`crate::server::run`].
pub async fn run_session_sweeper(editor: Arc<EditorService>, ttl: Duration) {
    let mut ticker = time::interval(sweep_interval(ttl));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let evicted = editor.evict_idle(ttl).await;
        let active = editor.session_count().await;
        gauge!("editor_sessions_active").set(active as f64);

        if evicted > 0 {
            tracing::info!(evicted, active, "Evicted idle editor sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSiteApi;

    #[test]
    fn test_sweep_interval_bounds() {
        assert_eq!(sweep_interval(Duration::from_secs(86_400)), Duration::from_secs(300));
        assert_eq!(sweep_interval(Duration::from_secs(600)), Duration::from_secs(60));
        assert_eq!(sweep_interval(Duration::from_secs(3)), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_idle_sessions() {
        let editor = Arc::new(EditorService::new(Arc::new(MockSiteApi::new())));
        editor.open(None).await;

        let task = tokio::spawn(run_session_sweeper(editor.clone(), Duration::from_secs(10)));
        time::sleep(Duration::from_secs(12)).await;

        assert_eq!(editor.session_count().await, 0);
        task.abort();
    }
}
