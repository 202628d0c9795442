use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::world::zone::{default_protected_zones, ProtectedAreaChecker, Zone};

/// Deployment configuration for the abuse engine. All fields have defaults,
/// so an empty YAML document is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AbuseConfig {
    #[serde(default = "default_combat_cooldown_secs")]
    pub combat_cooldown_secs: u64,
    #[serde(default = "default_teleport_throttle_secs")]
    pub teleport_throttle_secs: u64,
    #[serde(default = "default_protected_zones")]
    pub protected_zones: Vec<Zone>,
}

fn default_combat_cooldown_secs() -> u64 {
    60
}

fn default_teleport_throttle_secs() -> u64 {
    180
}

impl Default for AbuseConfig {
    fn default() -> Self {
        Self {
            combat_cooldown_secs: default_combat_cooldown_secs(),
            teleport_throttle_secs: default_teleport_throttle_secs(),
            protected_zones: default_protected_zones(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, message: String },
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, message } => {
                write!(f, "config read failed for {}: {}", path.display(), message)
            }
            ConfigError::Parse(message) => write!(f, "config parse failed: {}", message),
            ConfigError::Invalid(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AbuseConfig {
    /// Loads the configuration from a YAML file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: AbuseConfig =
            serde_yaml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the configuration from the environment: `VENTURAS_ABUSE_CONFIG`
    /// names a YAML file, and `VENTURAS_COMBAT_COOLDOWN_SECS` /
    /// `VENTURAS_TELEPORT_THROTTLE_SECS` override the windows.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("VENTURAS_ABUSE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim()))?,
            _ => Self::default(),
        };
        if let Some(seconds) = parse_env_secs("VENTURAS_COMBAT_COOLDOWN_SECS")? {
            config.combat_cooldown_secs = seconds;
        }
        if let Some(seconds) = parse_env_secs("VENTURAS_TELEPORT_THROTTLE_SECS")? {
            config.teleport_throttle_secs = seconds;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combat_cooldown_secs == 0 {
            return Err(ConfigError::Invalid(
                "combat_cooldown_secs must be positive".to_string(),
            ));
        }
        if self.teleport_throttle_secs == 0 {
            return Err(ConfigError::Invalid(
                "teleport_throttle_secs must be positive".to_string(),
            ));
        }
        for zone in &self.protected_zones {
            if zone.name.trim().is_empty() {
                return Err(ConfigError::Invalid("protected zone without a name".to_string()));
            }
            for bound in [zone.x1, zone.y1, zone.x2, zone.y2] {
                if !bound.is_finite() {
                    return Err(ConfigError::Invalid(format!(
                        "protected zone '{}' has a non-finite bound",
                        zone.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn combat_cooldown(&self) -> Duration {
        Duration::from_secs(self.combat_cooldown_secs)
    }

    pub fn teleport_throttle_window(&self) -> Duration {
        Duration::from_secs(self.teleport_throttle_secs)
    }

    /// Builds the zone classifier, re-normalizing corners so that reversed
    /// coordinates in a config file behave like ordered ones.
    pub fn protected_area_checker(&self) -> ProtectedAreaChecker {
        let zones = self
            .protected_zones
            .iter()
            .map(|zone| Zone::new(zone.name.clone(), zone.x1, zone.y1, zone.x2, zone.y2))
            .collect();
        ProtectedAreaChecker::new(zones)
    }
}

fn parse_env_secs(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::Invalid(format!("{} expected seconds, got '{}'", name, value)))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::position::Vector;

    #[test]
    fn defaults_are_valid() {
        let config = AbuseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.combat_cooldown(), Duration::from_secs(60));
        assert_eq!(config.teleport_throttle_window(), Duration::from_secs(180));
        assert!(config
            .protected_area_checker()
            .is_protected_zone(Vector::new(2000.0, 2000.0, 0.0)));
    }

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let config = AbuseConfig::from_yaml("{}").unwrap();
        assert_eq!(config.combat_cooldown_secs, 60);
        assert_eq!(config.teleport_throttle_secs, 180);
        assert_eq!(config.protected_zones.len(), 1);
    }

    #[test]
    fn yaml_overrides_windows_and_zones() {
        let text = "
combat_cooldown_secs: 30
teleport_throttle_secs: 600
protected_zones:
  - name: Arena
    x1: -100.0
    y1: -100.0
    x2: 100.0
    y2: 100.0
";
        let config = AbuseConfig::from_yaml(text).unwrap();
        assert_eq!(config.combat_cooldown(), Duration::from_secs(30));
        assert_eq!(config.teleport_throttle_window(), Duration::from_secs(600));

        let checker = config.protected_area_checker();
        assert_eq!(checker.zone_name(Vector::new(0.0, 0.0, 0.0)), Some("Arena"));
        assert!(!checker.is_protected_zone(Vector::new(2000.0, 2000.0, 0.0)));
    }

    #[test]
    fn reversed_zone_corners_are_normalized() {
        let text = "
protected_zones:
  - name: Flipped
    x1: 100.0
    y1: 100.0
    x2: 0.0
    y2: 0.0
";
        let config = AbuseConfig::from_yaml(text).unwrap();
        let checker = config.protected_area_checker();
        assert!(checker.is_protected_zone(Vector::new(50.0, 50.0, 0.0)));
    }

    #[test]
    fn zero_windows_are_rejected() {
        let err = AbuseConfig::from_yaml("combat_cooldown_secs: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AbuseConfig::from_yaml("teleport_throttle_secs: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn nameless_zones_are_rejected() {
        let text = "
protected_zones:
  - name: \"\"
    x1: 0.0
    y1: 0.0
    x2: 1.0
    y2: 1.0
";
        let err = AbuseConfig::from_yaml(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_finite_zone_bounds_are_rejected() {
        let text = "
protected_zones:
  - name: Broken
    x1: .nan
    y1: 0.0
    x2: 1.0
    y2: 1.0
";
        let err = AbuseConfig::from_yaml(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = AbuseConfig::from_yaml("combat_cooldown_secs: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AbuseConfig::load(Path::new("/nonexistent/abuse.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
