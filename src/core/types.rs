//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for pods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PodId(pub Uuid);

impl PodId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PodId {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn counter (simulation time unit)
pub type Turn = u64;

/// Tile position on the battlefield (x, y, height)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub height: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32, height: i32) -> Self {
        Self { x, y, height }
    }

    /// Euclidean distance in tiles, height included
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        let dh = (self.height - other.height) as f32;
        (dx * dx + dy * dy + dh * dh).sqrt()
    }
}

/// Category of combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Soldier,
    Alien,
    AlienRuler,
    Civilian,
    Vehicle,
    Robotic,
}

/// Base stat profile seeded at unit construction
#[derive(Debug, Clone, Copy)]
pub struct KindProfile {
    pub view_range: i32,
    pub movement_range: i32,
    pub base_initiative: i32,
}

impl UnitKind {
    /// Construction-time stat seed for this kind of combatant
    pub fn profile(&self) -> KindProfile {
        match self {
            UnitKind::Soldier => KindProfile {
                view_range: 14,
                movement_range: 8,
                base_initiative: 10,
            },
            UnitKind::Alien => KindProfile {
                view_range: 12,
                movement_range: 9,
                base_initiative: 10,
            },
            UnitKind::AlienRuler => KindProfile {
                view_range: 14,
                movement_range: 10,
                base_initiative: 14,
            },
            UnitKind::Civilian => KindProfile {
                view_range: 8,
                movement_range: 6,
                base_initiative: 6,
            },
            UnitKind::Vehicle => KindProfile {
                view_range: 12,
                movement_range: 12,
                base_initiative: 8,
            },
            UnitKind::Robotic => KindProfile {
                view_range: 12,
                movement_range: 7,
                base_initiative: 8,
            },
        }
    }

    /// Mechanical units shrug off bleeding-style flavor in the UI layer,
    /// but the hazard table itself applies uniformly.
    pub fn is_mechanical(&self) -> bool {
        matches!(self, UnitKind::Vehicle | UnitKind::Robotic)
    }
}
