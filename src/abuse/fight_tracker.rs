use std::collections::HashMap;
use std::time::Duration;

use crate::entities::player::PlayerId;
use crate::world::time::Timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FightRecord {
    last_inflicted: Option<Timestamp>,
    last_received: Option<Timestamp>,
}

/// Tracks when each player last dealt or took damage. Records are created
/// lazily on the first damage event and timestamps never move backwards.
#[derive(Debug, Default)]
pub struct FightTracker {
    records: HashMap<PlayerId, FightRecord>,
}

impl FightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_inflicted(&mut self, player: PlayerId, now: Timestamp) {
        let record = self.records.entry(player).or_default();
        record.last_inflicted = Some(match record.last_inflicted {
            Some(previous) => previous.max(now),
            None => now,
        });
    }

    pub fn record_received(&mut self, player: PlayerId, now: Timestamp) {
        let record = self.records.entry(player).or_default();
        record.last_received = Some(match record.last_received {
            Some(previous) => previous.max(now),
            None => now,
        });
    }

    /// `None` means the player never inflicted damage.
    pub fn time_since_inflicted(&self, player: PlayerId, now: Timestamp) -> Option<Duration> {
        self.records
            .get(&player)
            .and_then(|record| record.last_inflicted)
            .map(|at| now.saturating_since(at))
    }

    /// `None` means the player never received damage.
    pub fn time_since_received(&self, player: PlayerId, now: Timestamp) -> Option<Duration> {
        self.records
            .get(&player)
            .and_then(|record| record.last_received)
            .map(|at| now.saturating_since(at))
    }

    /// Drops the player's record. Called when their session ends.
    pub fn forget(&mut self, player: PlayerId) {
        self.records.remove(&player);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
