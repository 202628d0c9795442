use std::time::Duration;

use crate::abuse::constants::{format_time_limit, REASON_FIGHTING};
use crate::abuse::fight_tracker::FightTracker;
use crate::abuse::throttle::TeleportThrottle;
use crate::config::AbuseConfig;
use crate::entities::player::{Player, PlayerId};
use crate::telemetry::logging;
use crate::world::time::SharedClock;
use crate::world::zone::ProtectedAreaChecker;

/// Outcome of a teleport permission query. Denials always carry a
/// human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied { reason: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allowed => None,
            Decision::Denied { reason } => Some(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeleportOptions {
    /// Consult the teleport throttle in addition to the combat rules.
    pub enforce_time_limit: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleReportOptions {
    /// Whether the teleport that just happened counts against the throttle.
    pub time_limited: bool,
}

/// Decides whether a player may teleport right now, from their combat
/// recency, the teleport throttle and their privilege level.
pub struct AbusePolicy {
    combat_cooldown: Duration,
    throttle_window: Duration,
    zones: ProtectedAreaChecker,
    fights: FightTracker,
    throttle: TeleportThrottle,
    clock: SharedClock,
}

impl AbusePolicy {
    pub fn new(config: &AbuseConfig, clock: SharedClock) -> Self {
        Self {
            combat_cooldown: config.combat_cooldown(),
            throttle_window: config.teleport_throttle_window(),
            zones: config.protected_area_checker(),
            fights: FightTracker::new(),
            throttle: TeleportThrottle::new(),
            clock,
        }
    }

    pub fn with_defaults(clock: SharedClock) -> Self {
        Self::new(&AbuseConfig::default(), clock)
    }

    /// Decides whether the player may teleport. Administrators always may;
    /// otherwise recent fighting blocks the teleport, and so does the
    /// teleport throttle when the caller requests it.
    pub fn can_teleport(&self, player: &Player, options: TeleportOptions) -> Decision {
        if player.level.is_administrator() {
            return Decision::Allowed;
        }

        let now = self.clock.now();
        let zone = self.zones.zone_name(player.position);

        let inflicted_recently = self.within_window(
            self.fights.time_since_inflicted(player.id, now),
            self.combat_cooldown,
        );
        let received_recently = self.within_window(
            self.fights.time_since_received(player.id, now),
            self.combat_cooldown,
        );

        // Inside a protected area taking damage blocks teleports as well;
        // outside, only the player's own attacks count.
        let fighting = if zone.is_some() {
            inflicted_recently || received_recently
        } else {
            inflicted_recently
        };

        if fighting {
            logging::log_abuse(&format!(
                "{} denied teleport in {}: {}",
                player.name,
                zone.unwrap_or("the open world"),
                REASON_FIGHTING
            ));
            return Decision::Denied {
                reason: REASON_FIGHTING.to_string(),
            };
        }

        if options.enforce_time_limit {
            let throttled = self.within_window(
                self.throttle.time_since_report(player.id, now),
                self.throttle_window,
            );
            if throttled {
                let window_ms = self.throttle_window.as_millis().min(u64::MAX as u128) as u64;
                let reason = format_time_limit(window_ms);
                logging::log_abuse(&format!("{} denied teleport: {}", player.name, reason));
                return Decision::Denied { reason };
            }
        }

        Decision::Allowed
    }

    /// Records that a time-throttled teleport just happened. A report with
    /// `time_limited` unset is a no-op: the caller signals that this
    /// occurrence should not count against the throttle.
    pub fn report_time_throttled_teleport(&mut self, player: &Player, options: ThrottleReportOptions) {
        if !options.time_limited {
            return;
        }
        let now = self.clock.now();
        self.throttle.report(player.id, now);
    }

    /// Damage-event entry point for the hosting runtime. The actor's
    /// inflicted timestamp is always refreshed; the target's received
    /// timestamp only when a target was hit.
    pub fn record_damage(&mut self, actor: &Player, target: Option<&Player>) {
        let now = self.clock.now();
        self.fights.record_inflicted(actor.id, now);
        if let Some(target) = target {
            self.fights.record_received(target.id, now);
        }
    }

    /// Session-lifecycle hook: drops all state for a disconnected player.
    pub fn forget_player(&mut self, player: PlayerId) {
        self.fights.forget(player);
        self.throttle.forget(player);
    }

    fn within_window(&self, elapsed: Option<Duration>, window: Duration) -> bool {
        elapsed.map_or(false, |elapsed| elapsed < window)
    }
}
