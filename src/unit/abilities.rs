//! Cooldown-gated abilities and carried explosives
//!
//! Soldier and psionic abilities fire on the unit's own turn; reactive
//! abilities fire in response to an opponent's action and are gated
//! solely by their own cooldown, making repeated triggering within one
//! opportunity window impossible without external bookkeeping.

use serde::{Deserialize, Serialize};

/// An active soldier ability with a turn-based cooldown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierAbility {
    pub name: String,
    pub cooldown_turns: u32,
    remaining_cooldown: u32,
}

impl SoldierAbility {
    pub fn new(name: &str, cooldown_turns: u32) -> Self {
        Self {
            name: name.into(),
            cooldown_turns,
            remaining_cooldown: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_cooldown == 0
    }

    pub fn remaining_cooldown(&self) -> u32 {
        self.remaining_cooldown
    }

    /// Use the ability, starting its cooldown. False while cooling down.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining_cooldown = self.cooldown_turns;
        true
    }

    /// Once-per-turn cooldown decay
    pub fn tick(&mut self) {
        self.remaining_cooldown = self.remaining_cooldown.saturating_sub(1);
    }
}

/// A psionic ability; identical cooldown mechanics, plus a strength
/// rating the psi resolution layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsionicAbility {
    pub name: String,
    pub strength: i32,
    pub cooldown_turns: u32,
    remaining_cooldown: u32,
}

impl PsionicAbility {
    pub fn new(name: &str, strength: i32, cooldown_turns: u32) -> Self {
        Self {
            name: name.into(),
            strength,
            cooldown_turns,
            remaining_cooldown: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_cooldown == 0
    }

    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining_cooldown = self.cooldown_turns;
        true
    }

    pub fn tick(&mut self) {
        self.remaining_cooldown = self.remaining_cooldown.saturating_sub(1);
    }
}

/// Kind tag for reactive abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactiveKind {
    /// Free melee strike against adjacent enemy actions
    Bladestorm,
    /// Reaction shot when fired upon
    ReturnFire,
}

/// Cooldown-gated response to an opponent's action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactiveAbility {
    pub kind: ReactiveKind,
    pub cooldown_turns: u32,
    remaining_cooldown: u32,
}

impl ReactiveAbility {
    pub fn new(kind: ReactiveKind, cooldown_turns: u32) -> Self {
        Self {
            kind,
            cooldown_turns,
            remaining_cooldown: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_cooldown == 0
    }

    /// Fire the reaction if the cooldown allows; consumes the cooldown.
    /// The cooldown gate alone makes this re-entrant-safe within one
    /// opportunity window.
    pub fn try_trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining_cooldown = self.cooldown_turns;
        true
    }

    pub fn tick(&mut self) {
        self.remaining_cooldown = self.remaining_cooldown.saturating_sub(1);
    }
}

/// A carried explosive charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosive {
    pub name: String,
    pub damage: i32,
    pub radius: i32,
}

impl Explosive {
    pub fn frag_grenade() -> Self {
        Self {
            name: "Frag Grenade".into(),
            damage: 3,
            radius: 2,
        }
    }

    pub fn plasma_grenade() -> Self {
        Self {
            name: "Plasma Grenade".into(),
            damage: 5,
            radius: 2,
        }
    }
}
