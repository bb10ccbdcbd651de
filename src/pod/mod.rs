//! Pod coordination engine - group membership, reversible stat bonuses,
//! archetype behavior dispatch, tactic learning and reinforcement.

pub mod archetype;
pub mod bonuses;
pub mod group;
pub mod tactics;

pub use archetype::{BehaviorDelta, PodArchetype};
pub use bonuses::CoordinationBonuses;
pub use group::AlienPod;
pub use tactics::TacticBook;
