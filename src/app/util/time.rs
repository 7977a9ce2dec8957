use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_time_in_secs() -> u64 {
    current_duration().as_secs()
}

pub fn current_time_in_millis() -> u128 {
    current_duration().as_millis()
}

fn current_duration() -> std::time::Duration {
    // a clock set before the epoch reads as the epoch itself
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}
