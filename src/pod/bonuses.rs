//! Coordination bonus record
//!
//! A fixed set of named bonus fields rather than a string-keyed map, so
//! apply and remove are exact inverses by construction and a typo can
//! never leak stat drift across activate/deactivate cycles.

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Stat deltas a pod grants every member while active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinationBonuses {
    /// Weapon accuracy (percentage points)
    pub accuracy: i32,
    /// Weapon damage
    pub damage: i32,
    /// Movement range (tiles)
    pub movement: i32,
    /// Defense rating
    pub defense: i32,
}

impl CoordinationBonuses {
    pub fn new(accuracy: i32, damage: i32, movement: i32, defense: i32) -> Self {
        Self {
            accuracy,
            damage,
            movement,
            defense,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Raise every field by the escalation step
    pub fn escalate(&mut self, step: i32) {
        self.accuracy += step;
        self.damage += step;
        self.movement += step;
        self.defense += step;
    }

    /// Add the bonuses to a member's stats. Returns the record actually
    /// applied - a weaponless member takes no weapon-bound fields - so
    /// the caller can ledger it for exact later removal.
    pub fn apply_to(&self, unit: &mut Unit) -> CoordinationBonuses {
        let mut applied = *self;
        match unit.weapon.as_mut() {
            Some(weapon) => {
                weapon.accuracy += self.accuracy;
                weapon.damage += self.damage;
            }
            None => {
                applied.accuracy = 0;
                applied.damage = 0;
            }
        }
        unit.movement_range += self.movement;
        unit.defense += self.defense;
        applied
    }

    /// Subtract a previously applied record from a member's stats.
    /// Must be called with the exact record `apply_to` returned.
    pub fn remove_from(&self, unit: &mut Unit) {
        if let Some(weapon) = unit.weapon.as_mut() {
            weapon.accuracy -= self.accuracy;
            weapon.damage -= self.damage;
        }
        unit.movement_range -= self.movement;
        unit.defense -= self.defense;
    }
}
