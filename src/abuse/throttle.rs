use std::collections::HashMap;
use std::time::Duration;

use crate::entities::player::PlayerId;
use crate::world::time::Timestamp;

/// Tracks when each player last performed a time-throttled teleport.
#[derive(Debug, Default)]
pub struct TeleportThrottle {
    reports: HashMap<PlayerId, Timestamp>,
}

impl TeleportThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, player: PlayerId, now: Timestamp) {
        let entry = self.reports.entry(player).or_insert(now);
        *entry = (*entry).max(now);
    }

    /// `None` means no throttled teleport was ever reported for the player.
    pub fn time_since_report(&self, player: PlayerId, now: Timestamp) -> Option<Duration> {
        self.reports
            .get(&player)
            .map(|at| now.saturating_since(*at))
    }

    /// Drops the player's record. Called when their session ends.
    pub fn forget(&mut self, player: PlayerId) {
        self.reports.remove(&player);
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreported_player_has_no_recency() {
        let throttle = TeleportThrottle::new();
        assert_eq!(throttle.time_since_report(PlayerId(1), Timestamp(1000)), None);
    }

    #[test]
    fn report_recency_follows_supplied_time() {
        let mut throttle = TeleportThrottle::new();
        throttle.report(PlayerId(1), Timestamp(30_000));

        assert_eq!(
            throttle.time_since_report(PlayerId(1), Timestamp(30_000)),
            Some(Duration::ZERO)
        );
        assert_eq!(
            throttle.time_since_report(PlayerId(1), Timestamp(210_000)),
            Some(Duration::from_secs(180))
        );
    }

    #[test]
    fn later_reports_replace_earlier_ones() {
        let mut throttle = TeleportThrottle::new();
        throttle.report(PlayerId(1), Timestamp(10_000));
        throttle.report(PlayerId(1), Timestamp(20_000));

        assert_eq!(
            throttle.time_since_report(PlayerId(1), Timestamp(25_000)),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn stale_reports_never_move_the_record_backwards() {
        let mut throttle = TeleportThrottle::new();
        throttle.report(PlayerId(1), Timestamp(20_000));
        throttle.report(PlayerId(1), Timestamp(10_000));

        assert_eq!(
            throttle.time_since_report(PlayerId(1), Timestamp(20_000)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn forget_evicts_the_record() {
        let mut throttle = TeleportThrottle::new();
        throttle.report(PlayerId(1), Timestamp(10_000));

        throttle.forget(PlayerId(1));

        assert!(throttle.is_empty());
        assert_eq!(throttle.time_since_report(PlayerId(1), Timestamp(10_000)), None);
    }
}
