pub mod abuse;
pub mod config;
pub mod entities;
pub mod telemetry;
pub mod world;

pub use abuse::constants::{
    format_time_limit, COMBAT_COOLDOWN, REASON_FIGHTING, TELEPORT_THROTTLE_WINDOW,
};
pub use abuse::fight_tracker::FightTracker;
pub use abuse::policy::{AbusePolicy, Decision, TeleportOptions, ThrottleReportOptions};
pub use abuse::throttle::TeleportThrottle;
pub use config::{AbuseConfig, ConfigError};
pub use entities::player::{Player, PlayerId, PrivilegeLevel};
pub use world::position::Vector;
pub use world::time::{Clock, SharedClock, SystemClock, Timestamp, VirtualClock};
pub use world::zone::{ProtectedAreaChecker, Zone};
