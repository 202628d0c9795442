use crate::world::position::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Privilege ladder of a connected player. Administrators and above are
/// exempt from the abuse limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeLevel {
    Player,
    Administrator,
    Management,
}

impl PrivilegeLevel {
    pub fn is_administrator(self) -> bool {
        self >= PrivilegeLevel::Administrator
    }
}

/// The abuse engine's view of a connected player. The hosting runtime owns
/// the full player state; the engine only reads these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Vector,
    pub level: PrivilegeLevel,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Vector::default(),
            level: PrivilegeLevel::Player,
        }
    }
}
