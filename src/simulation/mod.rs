//! Turn processing - per-unit upkeep ordering and a deterministic
//! headless skirmish harness driving the combat core end-to-end.

pub mod turn;

pub use turn::{run_unit_upkeep, Skirmish, SkirmishEvent, SkirmishReport};
