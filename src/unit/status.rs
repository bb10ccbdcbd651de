//! Timed status effects
//!
//! Effects carry a kind, a remaining duration in turns and an intensity.
//! Expired effects (duration <= 0) are never reported active; pruning and
//! decrementing are two distinct operations, always paired in that order,
//! invoked exactly once per turn.

use serde::{Deserialize, Serialize};

/// Kind of timed effect attached to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    // Damage-bearing environmental hazards: applying one deals its
    // intensity as immediate damage.
    Burning,
    Corrosion,
    Electrocution,
    Radiation,
    Frostbite,
    Bleeding,
    Poisoned,
    Frozen,

    // Marker effects: recorded for their duration, no immediate damage.
    Stunned,
    Marked,
    Overwatch,
    Suppressed,
}

impl EffectKind {
    /// Does applying this kind deal its intensity as immediate damage?
    pub fn deals_immediate_damage(&self) -> bool {
        matches!(
            self,
            EffectKind::Burning
                | EffectKind::Corrosion
                | EffectKind::Electrocution
                | EffectKind::Radiation
                | EffectKind::Frostbite
                | EffectKind::Bleeding
                | EffectKind::Poisoned
                | EffectKind::Frozen
        )
    }
}

/// One timed effect record, exclusively owned by its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: EffectKind,
    pub remaining_turns: i32,
    pub intensity: i32,
}

impl StatusEffect {
    pub fn new(kind: EffectKind, duration: i32, intensity: i32) -> Self {
        Self {
            kind,
            remaining_turns: duration,
            intensity,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_turns > 0
    }
}

/// Ordered collection of a unit's timed effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffectRegistry {
    effects: Vec<StatusEffect>,
}

impl StatusEffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new effect record
    pub fn add(&mut self, kind: EffectKind, duration: i32, intensity: i32) {
        self.effects.push(StatusEffect::new(kind, duration, intensity));
    }

    /// Remove every record of the given kind, active or not
    pub fn remove_all(&mut self, kind: EffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Is at least one non-expired record of this kind present?
    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind && e.is_active())
    }

    /// Strongest active intensity of the given kind, 0 if none
    pub fn intensity_of(&self, kind: EffectKind) -> i32 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind && e.is_active())
            .map(|e| e.intensity)
            .max()
            .unwrap_or(0)
    }

    /// Iterate the active (non-expired) records
    pub fn iter_active(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|e| e.is_active())
    }

    /// Once-per-turn processing: prune every expired record, then
    /// decrement every survivor. The order guarantees an effect added
    /// with duration 1 lives for exactly one full turn.
    pub fn tick(&mut self) {
        self.effects.retain(|e| e.remaining_turns > 0);
        for effect in &mut self.effects {
            effect.remaining_turns -= 1;
        }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
