use std::time::Duration;

/// Window during which a damage event blocks teleportation.
pub const COMBAT_COOLDOWN: Duration = Duration::from_secs(60);

/// Default window during which a time-throttled teleport blocks the next
/// one. Deployments may override it through the abuse configuration.
pub const TELEPORT_THROTTLE_WINDOW: Duration = Duration::from_secs(180);

pub const REASON_FIGHTING: &str = "you have recently been in a fight";

/// Denial phrase for time-throttled actions. A duration of 180000 ms
/// renders as "can only do so once per 3 minutes".
pub fn format_time_limit(duration_ms: u64) -> String {
    format!("can only do so once per {}", duration_phrase(duration_ms / 1000))
}

fn duration_phrase(seconds: u64) -> String {
    if seconds < 60 {
        return if seconds == 1 {
            "second".to_string()
        } else {
            format!("{} seconds", seconds)
        };
    }

    if seconds >= 3600 {
        let hours = seconds / 3600;
        return if hours == 1 && seconds % 3600 == 0 {
            "hour".to_string()
        } else {
            format!("{} hours", hours)
        };
    }

    let minutes = seconds / 60;
    if seconds % 60 == 0 {
        return if minutes == 1 {
            "minute".to_string()
        } else {
            format!("{} minutes", minutes)
        };
    }

    format!("{}:{:02} minutes", minutes, seconds % 60)
}
