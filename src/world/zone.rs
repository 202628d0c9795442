use serde::{Deserialize, Serialize};

use crate::world::position::Vector;

/// A named rectangular region of the game world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Zone {
    /// Create a new zone
    pub fn new(name: impl Into<String>, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        // Ensure coordinates are ordered correctly
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        Zone {
            name: name.into(),
            x1,
            y1,
            x2,
            y2,
        }
    }

    /// Check if a position is within this zone. Zone footprints are
    /// city-scale, so height is not part of the boundary.
    pub fn contains(&self, position: Vector) -> bool {
        position.x >= self.x1
            && position.x <= self.x2
            && position.y >= self.y1
            && position.y <= self.y2
    }
}

/// The protected areas where combat blocks teleportation for both the
/// attacker and the victim.
#[derive(Debug, Clone)]
pub struct ProtectedAreaChecker {
    zones: Vec<Zone>,
}

impl ProtectedAreaChecker {
    pub fn new(zones: Vec<Zone>) -> Self {
        ProtectedAreaChecker { zones }
    }

    /// Get the name of the protected zone containing a position, if any
    pub fn zone_name(&self, position: Vector) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.contains(position))
            .map(|zone| zone.name.as_str())
    }

    pub fn is_protected_zone(&self, position: Vector) -> bool {
        self.zone_name(position).is_some()
    }
}

pub(crate) fn default_protected_zones() -> Vec<Zone> {
    // The Las Venturas island, east of the river that separates it from
    // the rest of the map.
    vec![Zone::new("Las Venturas", 863.0, 595.0, 3000.0, 3000.0)]
}

impl Default for ProtectedAreaChecker {
    fn default() -> Self {
        ProtectedAreaChecker::new(default_protected_zones())
    }
}
