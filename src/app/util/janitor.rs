use std::{sync::Arc, time::Duration};

use tokio::{
    task,
    time::{interval, sleep},
};

use crate::{app::util::time::current_time_in_secs, AppState};

static SWEEP_INTERVAL_SECS: u64 = 600;

pub fn spawn(state: Arc<AppState>) {
    tracing::debug!("janitor spawned");

    task::spawn(async move {
        sleep(Duration::from_secs(SWEEP_INTERVAL_SECS)).await;
        let mut interval = interval(Duration::from_secs(SWEEP_INTERVAL_SECS));

        loop {
            interval.tick().await;
            cleanup_sessions(&state);
        }
    });
}

/// Forgets sessions untouched for longer than the configured ttl.
pub fn cleanup_sessions(state: &Arc<AppState>) -> usize {
    let cutoff = current_time_in_secs().saturating_sub(state.envy.session_ttl_secs());
    let evicted = state.sessions.evict_stale(cutoff);

    if evicted > 0 {
        tracing::debug!("evicted {} stale session(s)", evicted);
    }

    evicted
}
