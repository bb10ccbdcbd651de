//! Fractional action point tracking
//!
//! Points are spent during a unit's turn and reset to the per-turn
//! budget at the start of the next one. The balance never goes negative.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionEconomy {
    points: f32,
    per_turn: f32,
}

impl ActionEconomy {
    pub fn new(per_turn: f32) -> Self {
        Self {
            points: per_turn,
            per_turn,
        }
    }

    pub fn points(&self) -> f32 {
        self.points
    }

    pub fn per_turn(&self) -> f32 {
        self.per_turn
    }

    pub fn can_spend(&self, cost: f32) -> bool {
        cost >= 0.0 && self.points >= cost
    }

    /// Deduct the cost. No-op returning false when the balance is short.
    pub fn spend(&mut self, cost: f32) -> bool {
        if !self.can_spend(cost) {
            return false;
        }
        self.points = (self.points - cost).max(0.0);
        true
    }

    /// Add bonus points (e.g. from an inspire-type ability)
    pub fn grant(&mut self, amount: f32) {
        if amount > 0.0 {
            self.points += amount;
        }
    }

    /// Refill to the per-turn budget
    pub fn reset(&mut self) {
        self.points = self.per_turn;
    }
}
