//! Set-of-active-states abstraction for combatants
//!
//! A unit's discrete condition is a set of overlapping states, not a
//! single enum. Legal combinations are declared in one conflict table;
//! transitions go through guarded enter/leave calls.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct StateFlags: u8 {
        const CONCEALED    = 1 << 0;
        const OVERWATCHING = 1 << 1;
        const SUPPRESSED   = 1 << 2;
        const FLANKED      = 1 << 3;
        const STABILIZED   = 1 << 4;
        const FALLEN       = 1 << 5;
    }
}

/// A discrete state a living unit can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitState {
    Concealed,
    Overwatching,
    Suppressed,
    Flanked,
    Stabilized,
    Fallen,
}

impl UnitState {
    pub const ALL: [UnitState; 6] = [
        UnitState::Concealed,
        UnitState::Overwatching,
        UnitState::Suppressed,
        UnitState::Flanked,
        UnitState::Stabilized,
        UnitState::Fallen,
    ];

    fn flag(self) -> StateFlags {
        match self {
            UnitState::Concealed => StateFlags::CONCEALED,
            UnitState::Overwatching => StateFlags::OVERWATCHING,
            UnitState::Suppressed => StateFlags::SUPPRESSED,
            UnitState::Flanked => StateFlags::FLANKED,
            UnitState::Stabilized => StateFlags::STABILIZED,
            UnitState::Fallen => StateFlags::FALLEN,
        }
    }

    /// States that cannot be held at the same time as this one
    ///
    /// A downed unit can neither hide nor hold a firing stance; the
    /// reverse pairings mirror that.
    fn conflicts(self) -> StateFlags {
        match self {
            UnitState::Concealed => StateFlags::FALLEN,
            UnitState::Overwatching => StateFlags::FALLEN,
            UnitState::Fallen => StateFlags::CONCEALED.union(StateFlags::OVERWATCHING),
            UnitState::Suppressed | UnitState::Flanked | UnitState::Stabilized => {
                StateFlags::empty()
            }
        }
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        StateFlags::empty()
    }
}

/// Guarded set of active unit states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSet {
    flags: StateFlags,
}

impl StateSet {
    pub fn new() -> Self {
        Self {
            flags: StateFlags::empty(),
        }
    }

    pub fn contains(&self, state: UnitState) -> bool {
        self.flags.contains(state.flag())
    }

    /// Enter a state. Fails (no-op) if already held or in conflict with
    /// a currently held state.
    pub fn try_enter(&mut self, state: UnitState) -> bool {
        if self.flags.contains(state.flag()) {
            return false;
        }
        if self.flags.intersects(state.conflicts()) {
            return false;
        }
        self.flags.insert(state.flag());
        true
    }

    /// Leave a state. Fails (no-op) if not currently held.
    pub fn leave(&mut self, state: UnitState) -> bool {
        if !self.flags.contains(state.flag()) {
            return false;
        }
        self.flags.remove(state.flag());
        true
    }

    /// Drop every active state. Used on death: a dead unit holds none.
    pub fn clear(&mut self) {
        self.flags = StateFlags::empty();
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Snapshot of currently held states, in declaration order
    pub fn active(&self) -> Vec<UnitState> {
        UnitState::ALL
            .into_iter()
            .filter(|s| self.contains(*s))
            .collect()
    }
}

// Serialized as the raw bit pattern; unknown bits are dropped on read.
impl Serialize for StateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.flags.bits())
    }
}

impl<'de> Deserialize<'de> for StateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self {
            flags: StateFlags::from_bits_truncate(bits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut set = StateSet::new();
        assert!(set.try_enter(UnitState::Concealed));
        assert!(set.contains(UnitState::Concealed));
        assert!(set.leave(UnitState::Concealed));
        assert!(!set.contains(UnitState::Concealed));
    }

    #[test]
    fn test_double_enter_rejected() {
        let mut set = StateSet::new();
        assert!(set.try_enter(UnitState::Suppressed));
        assert!(!set.try_enter(UnitState::Suppressed));
    }

    #[test]
    fn test_leave_unheld_rejected() {
        let mut set = StateSet::new();
        assert!(!set.leave(UnitState::Flanked));
    }

    #[test]
    fn test_fallen_blocks_concealment() {
        let mut set = StateSet::new();
        assert!(set.try_enter(UnitState::Fallen));
        assert!(!set.try_enter(UnitState::Concealed));
        assert!(!set.try_enter(UnitState::Overwatching));
    }

    #[test]
    fn test_concealed_blocks_fallen() {
        let mut set = StateSet::new();
        assert!(set.try_enter(UnitState::Concealed));
        assert!(!set.try_enter(UnitState::Fallen));
    }

    #[test]
    fn test_non_conflicting_states_stack() {
        let mut set = StateSet::new();
        assert!(set.try_enter(UnitState::Suppressed));
        assert!(set.try_enter(UnitState::Flanked));
        assert!(set.try_enter(UnitState::Concealed));
        assert_eq!(set.active().len(), 3);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut set = StateSet::new();
        set.try_enter(UnitState::Suppressed);
        set.try_enter(UnitState::Stabilized);
        set.clear();
        assert!(set.is_empty());
    }
}
