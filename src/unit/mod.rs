//! Unit state engine - per-combatant health, action economy, status
//! effects, concealment, suppression, overwatch and reactive abilities.

pub mod abilities;
pub mod actions;
pub mod combatant;
pub mod equipment;
pub mod states;
pub mod status;

pub use abilities::{Explosive, PsionicAbility, ReactiveAbility, ReactiveKind, SoldierAbility};
pub use actions::ActionEconomy;
pub use combatant::{ActionType, Unit};
pub use equipment::{Armor, Weapon};
pub use states::{StateSet, UnitState};
pub use status::{EffectKind, StatusEffect, StatusEffectRegistry};
