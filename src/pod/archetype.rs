//! Pod behavior archetypes and their data tables
//!
//! Each archetype maps to fixed data records: the coordination bonuses
//! granted on activation, the per-turn behavior delta applied while
//! coordinating, the seeded tactics, and the reinforcement budget.
//! Adding an archetype is a data change, not new control flow.

use serde::{Deserialize, Serialize};

use crate::pod::bonuses::CoordinationBonuses;

/// Behavioral archetype of a pod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodArchetype {
    Patrol,
    Guard,
    Reinforcement,
    Elite,
    Boss,
    Ambush,
    Pursuit,
    Defensive,
    Aggressive,
    Stealth,
    Support,
    Artillery,
    Melee,
    Flying,
    Underground,
    Water,
    Urban,
    Rural,
    Industrial,
    Laboratory,
    Military,
    Civilian,
    Hunter,
    Scavenger,
    Constructor,
    Infiltrator,
    Interrogator,
    Executioner,
    Specialist,
}

/// Per-turn stat/flag deltas a coordinating pod applies to every living
/// member. Deltas compound on every dispatch; the turn loop invokes the
/// dispatch at most once per unit-turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorDelta {
    pub accuracy: i32,
    pub damage: i32,
    pub movement: i32,
    pub crit: i32,
    pub initiative: i32,
    pub psi: i32,
    pub enters_overwatch: bool,
    pub conceals: bool,
}

impl PodArchetype {
    pub const ALL: [PodArchetype; 29] = [
        PodArchetype::Patrol,
        PodArchetype::Guard,
        PodArchetype::Reinforcement,
        PodArchetype::Elite,
        PodArchetype::Boss,
        PodArchetype::Ambush,
        PodArchetype::Pursuit,
        PodArchetype::Defensive,
        PodArchetype::Aggressive,
        PodArchetype::Stealth,
        PodArchetype::Support,
        PodArchetype::Artillery,
        PodArchetype::Melee,
        PodArchetype::Flying,
        PodArchetype::Underground,
        PodArchetype::Water,
        PodArchetype::Urban,
        PodArchetype::Rural,
        PodArchetype::Industrial,
        PodArchetype::Laboratory,
        PodArchetype::Military,
        PodArchetype::Civilian,
        PodArchetype::Hunter,
        PodArchetype::Scavenger,
        PodArchetype::Constructor,
        PodArchetype::Infiltrator,
        PodArchetype::Interrogator,
        PodArchetype::Executioner,
        PodArchetype::Specialist,
    ];

    /// Bonuses granted to every member while the pod is active
    pub fn coordination_bonuses(&self) -> CoordinationBonuses {
        match self {
            PodArchetype::Patrol => CoordinationBonuses::new(2, 0, 1, 0),
            PodArchetype::Guard => CoordinationBonuses::new(3, 0, 0, 2),
            PodArchetype::Reinforcement => CoordinationBonuses::new(2, 1, 1, 0),
            PodArchetype::Elite => CoordinationBonuses::new(10, 5, 0, 5),
            PodArchetype::Boss => CoordinationBonuses::new(10, 10, 0, 10),
            PodArchetype::Ambush => CoordinationBonuses::new(5, 0, 0, 0),
            PodArchetype::Pursuit => CoordinationBonuses::new(2, 0, 2, 0),
            PodArchetype::Defensive => CoordinationBonuses::new(0, 0, 0, 5),
            PodArchetype::Aggressive => CoordinationBonuses::new(3, 3, 1, 0),
            PodArchetype::Stealth => CoordinationBonuses::new(3, 0, 1, 0),
            PodArchetype::Support => CoordinationBonuses::new(2, 0, 0, 2),
            PodArchetype::Artillery => CoordinationBonuses::new(4, 2, 0, 0),
            PodArchetype::Melee => CoordinationBonuses::new(0, 4, 2, 0),
            PodArchetype::Flying => CoordinationBonuses::new(2, 0, 3, 2),
            PodArchetype::Underground => CoordinationBonuses::new(0, 2, 0, 3),
            PodArchetype::Water => CoordinationBonuses::new(1, 1, 1, 1),
            PodArchetype::Urban => CoordinationBonuses::new(3, 1, 0, 2),
            PodArchetype::Rural => CoordinationBonuses::new(2, 1, 1, 0),
            PodArchetype::Industrial => CoordinationBonuses::new(2, 2, 0, 2),
            PodArchetype::Laboratory => CoordinationBonuses::new(2, 0, 0, 2),
            PodArchetype::Military => CoordinationBonuses::new(4, 2, 0, 2),
            PodArchetype::Civilian => CoordinationBonuses::new(0, 0, 1, 0),
            PodArchetype::Hunter => CoordinationBonuses::new(4, 2, 1, 0),
            PodArchetype::Scavenger => CoordinationBonuses::new(1, 1, 2, 0),
            PodArchetype::Constructor => CoordinationBonuses::new(0, 0, 0, 4),
            PodArchetype::Infiltrator => CoordinationBonuses::new(3, 0, 2, 0),
            PodArchetype::Interrogator => CoordinationBonuses::new(2, 0, 0, 2),
            PodArchetype::Executioner => CoordinationBonuses::new(0, 6, 0, 0),
            PodArchetype::Specialist => CoordinationBonuses::new(3, 2, 1, 2),
        }
    }

    /// Per-turn coordination deltas for this archetype
    pub fn behavior_delta(&self) -> BehaviorDelta {
        match self {
            PodArchetype::Patrol => BehaviorDelta {
                movement: 1,
                ..Default::default()
            },
            PodArchetype::Guard => BehaviorDelta {
                accuracy: 5,
                enters_overwatch: true,
                ..Default::default()
            },
            PodArchetype::Reinforcement => BehaviorDelta {
                movement: 2,
                initiative: 5,
                ..Default::default()
            },
            PodArchetype::Elite => BehaviorDelta {
                accuracy: 10,
                damage: 5,
                ..Default::default()
            },
            PodArchetype::Boss => BehaviorDelta {
                initiative: 20,
                damage: 10,
                ..Default::default()
            },
            PodArchetype::Ambush => BehaviorDelta {
                crit: 25,
                conceals: true,
                ..Default::default()
            },
            PodArchetype::Pursuit => BehaviorDelta {
                movement: 3,
                accuracy: 2,
                ..Default::default()
            },
            PodArchetype::Defensive => BehaviorDelta {
                accuracy: 3,
                enters_overwatch: true,
                ..Default::default()
            },
            PodArchetype::Aggressive => BehaviorDelta {
                damage: 4,
                movement: 1,
                ..Default::default()
            },
            PodArchetype::Stealth => BehaviorDelta {
                movement: 1,
                conceals: true,
                ..Default::default()
            },
            PodArchetype::Support => BehaviorDelta {
                psi: 3,
                accuracy: 2,
                ..Default::default()
            },
            PodArchetype::Artillery => BehaviorDelta {
                accuracy: 6,
                damage: 3,
                ..Default::default()
            },
            PodArchetype::Melee => BehaviorDelta {
                movement: 2,
                damage: 3,
                crit: 5,
                ..Default::default()
            },
            PodArchetype::Flying => BehaviorDelta {
                movement: 3,
                initiative: 4,
                ..Default::default()
            },
            PodArchetype::Underground => BehaviorDelta {
                damage: 2,
                conceals: true,
                ..Default::default()
            },
            PodArchetype::Water => BehaviorDelta {
                movement: 2,
                ..Default::default()
            },
            PodArchetype::Urban => BehaviorDelta {
                accuracy: 4,
                enters_overwatch: true,
                ..Default::default()
            },
            PodArchetype::Rural => BehaviorDelta {
                accuracy: 3,
                movement: 1,
                ..Default::default()
            },
            PodArchetype::Industrial => BehaviorDelta {
                damage: 3,
                accuracy: 2,
                ..Default::default()
            },
            PodArchetype::Laboratory => BehaviorDelta {
                psi: 4,
                initiative: 2,
                ..Default::default()
            },
            PodArchetype::Military => BehaviorDelta {
                accuracy: 5,
                enters_overwatch: true,
                ..Default::default()
            },
            PodArchetype::Civilian => BehaviorDelta {
                movement: 1,
                ..Default::default()
            },
            PodArchetype::Hunter => BehaviorDelta {
                accuracy: 4,
                crit: 10,
                ..Default::default()
            },
            PodArchetype::Scavenger => BehaviorDelta {
                movement: 2,
                initiative: 2,
                ..Default::default()
            },
            PodArchetype::Constructor => BehaviorDelta {
                initiative: 2,
                enters_overwatch: true,
                ..Default::default()
            },
            PodArchetype::Infiltrator => BehaviorDelta {
                crit: 10,
                conceals: true,
                ..Default::default()
            },
            PodArchetype::Interrogator => BehaviorDelta {
                psi: 5,
                ..Default::default()
            },
            PodArchetype::Executioner => BehaviorDelta {
                damage: 6,
                crit: 15,
                ..Default::default()
            },
            PodArchetype::Specialist => BehaviorDelta {
                accuracy: 3,
                psi: 2,
                initiative: 2,
                ..Default::default()
            },
        }
    }

    /// Tactics seeded into a new pod of this archetype
    pub fn initial_tactics(&self) -> &'static [&'static str] {
        match self {
            PodArchetype::Patrol => &["patrol_sweep", "flank_left"],
            PodArchetype::Guard => &["hold_position", "interlock_fire"],
            PodArchetype::Reinforcement => &["rapid_deploy"],
            PodArchetype::Elite => &["focus_fire", "bounding_advance"],
            PodArchetype::Boss => &["terror_roar", "focus_fire"],
            PodArchetype::Ambush => &["spring_trap"],
            PodArchetype::Pursuit => &["run_down"],
            PodArchetype::Defensive => &["hunker_line"],
            PodArchetype::Aggressive => &["overrun"],
            PodArchetype::Stealth => &["shadow_approach"],
            PodArchetype::Support => &["shield_allies"],
            PodArchetype::Artillery => &["bombard"],
            PodArchetype::Melee => &["close_distance"],
            PodArchetype::Flying => &["dive_strike"],
            PodArchetype::Underground => &["burrow_ambush"],
            PodArchetype::Water => &["tide_flank"],
            PodArchetype::Urban => &["window_overwatch"],
            PodArchetype::Rural => &["hedgerow_creep"],
            PodArchetype::Industrial => &["machine_cover"],
            PodArchetype::Laboratory => &["containment_sweep"],
            PodArchetype::Military => &["fire_and_maneuver"],
            PodArchetype::Civilian => &["scatter"],
            PodArchetype::Hunter => &["mark_quarry"],
            PodArchetype::Scavenger => &["strip_field"],
            PodArchetype::Constructor => &["fortify"],
            PodArchetype::Infiltrator => &["slip_behind"],
            PodArchetype::Interrogator => &["seize_subject"],
            PodArchetype::Executioner => &["single_out"],
            PodArchetype::Specialist => &["adaptive_doctrine"],
        }
    }

    /// The tactic a coordinating pod of this archetype leans on
    pub fn signature_tactic(&self) -> &'static str {
        self.initial_tactics().first().copied().unwrap_or("advance")
    }

    /// How many reinforcement waves this archetype can call in
    pub fn max_reinforcements(&self) -> u32 {
        match self {
            PodArchetype::Reinforcement => 5,
            PodArchetype::Boss | PodArchetype::Military => 3,
            PodArchetype::Elite
            | PodArchetype::Pursuit
            | PodArchetype::Defensive
            | PodArchetype::Aggressive
            | PodArchetype::Support
            | PodArchetype::Artillery
            | PodArchetype::Flying
            | PodArchetype::Underground
            | PodArchetype::Urban
            | PodArchetype::Industrial
            | PodArchetype::Constructor
            | PodArchetype::Specialist => 2,
            PodArchetype::Civilian => 0,
            _ => 1,
        }
    }
}
