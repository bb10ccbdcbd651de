//! The pod: a coordinated group of hostile units
//!
//! A pod holds unit ids, never unit lifetimes: members live in the
//! orchestrator's roster and every operation takes it as a parameter.
//! Activation bonuses go through a per-member applied ledger so that
//! apply/remove stay exact inverses no matter how membership changes
//! between the two.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::{GridPosition, PodId, UnitId};
use crate::pod::archetype::PodArchetype;
use crate::pod::bonuses::CoordinationBonuses;
use crate::pod::tactics::TacticBook;
use crate::roster::Roster;
use crate::unit::UnitState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienPod {
    pub id: PodId,
    pub archetype: PodArchetype,
    member_ids: Vec<UnitId>,
    position: GridPosition,

    pub is_active: bool,
    pub is_coordinating: bool,
    pub is_reinforcing: bool,

    escalation_level: u32,
    bonuses: CoordinationBonuses,
    /// What was actually added to each member, recorded at apply time
    applied: AHashMap<UnitId, CoordinationBonuses>,

    tactics: TacticBook,
    reinforcement_count: u32,
    max_reinforcements: u32,
}

impl AlienPod {
    pub fn new(archetype: PodArchetype) -> Self {
        Self {
            id: PodId::new(),
            archetype,
            member_ids: Vec::new(),
            position: GridPosition::default(),
            is_active: false,
            is_coordinating: false,
            is_reinforcing: false,
            escalation_level: 0,
            bonuses: archetype.coordination_bonuses(),
            applied: AHashMap::new(),
            tactics: TacticBook::seeded(archetype.initial_tactics()),
            reinforcement_count: 0,
            max_reinforcements: archetype.max_reinforcements(),
        }
    }

    // === ACCESSORS ===

    pub fn members(&self) -> &[UnitId] {
        &self.member_ids
    }

    /// Centroid of member positions. With zero members this keeps its
    /// last value: stale but valid, never undefined.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn escalation_level(&self) -> u32 {
        self.escalation_level
    }

    pub fn bonuses(&self) -> CoordinationBonuses {
        self.bonuses
    }

    pub fn tactics(&self) -> &TacticBook {
        &self.tactics
    }

    pub fn reinforcement_count(&self) -> u32 {
        self.reinforcement_count
    }

    pub fn max_reinforcements(&self) -> u32 {
        self.max_reinforcements
    }

    /// The bonus record currently applied to a member, if any
    pub fn applied_bonus(&self, id: &UnitId) -> Option<&CoordinationBonuses> {
        self.applied.get(id)
    }

    // === MEMBERSHIP ===

    /// Attach a unit to the pod. While the pod is active the new member
    /// is bonused immediately; while inactive it waits for the next
    /// activation.
    pub fn add_member(&mut self, id: UnitId, roster: &mut Roster) -> bool {
        if self.member_ids.contains(&id) || !roster.contains(&id) {
            return false;
        }
        self.member_ids.push(id);
        if self.is_active {
            if let Some(unit) = roster.get_mut(&id) {
                let record = self.bonuses.apply_to(unit);
                self.applied.insert(id, record);
            }
        }
        self.recompute_position(roster);
        true
    }

    /// Detach a unit. Any recorded bonuses are stripped first so a
    /// member can never walk away with pod stats.
    pub fn remove_member(&mut self, id: UnitId, roster: &mut Roster) -> bool {
        let Some(index) = self.member_ids.iter().position(|m| *m == id) else {
            return false;
        };
        if let Some(record) = self.applied.remove(&id) {
            if let Some(unit) = roster.get_mut(&id) {
                record.remove_from(unit);
            }
        }
        self.member_ids.remove(index);
        self.recompute_position(roster);
        true
    }

    fn recompute_position(&mut self, roster: &Roster) {
        let positions: Vec<GridPosition> = self
            .member_ids
            .iter()
            .filter_map(|id| roster.get(id))
            .map(|u| u.position)
            .collect();
        if positions.is_empty() {
            return;
        }
        let count = positions.len() as i32;
        self.position = GridPosition::new(
            positions.iter().map(|p| p.x).sum::<i32>() / count,
            positions.iter().map(|p| p.y).sum::<i32>() / count,
            positions.iter().map(|p| p.height).sum::<i32>() / count,
        );
    }

    /// Re-derive the centroid after members moved
    pub fn refresh_position(&mut self, roster: &Roster) {
        self.recompute_position(roster);
    }

    // === ACTIVATION ===

    /// Proximity trigger: any living member within the activation
    /// radius of the given position while the pod is inactive.
    pub fn should_activate(&self, position: GridPosition, roster: &Roster) -> bool {
        if self.is_active {
            return false;
        }
        self.member_ids
            .iter()
            .filter_map(|id| roster.get(id))
            .any(|u| u.is_alive() && u.position.distance(&position) <= config().pod_activation_radius)
    }

    /// Wake the pod, applying coordination bonuses once to every
    /// current member. The ledger guards against double application.
    pub fn activate(&mut self, roster: &mut Roster) -> bool {
        if self.is_active {
            return false;
        }
        self.is_active = true;
        for id in &self.member_ids {
            if self.applied.contains_key(id) {
                continue;
            }
            if let Some(unit) = roster.get_mut(id) {
                let record = self.bonuses.apply_to(unit);
                self.applied.insert(*id, record);
            }
        }
        tracing::debug!(pod = ?self.id, archetype = ?self.archetype, "pod activated");
        true
    }

    /// Stand the pod down, removing exactly what activation applied.
    pub fn deactivate(&mut self, roster: &mut Roster) -> bool {
        if !self.is_active {
            return false;
        }
        for (id, record) in self.applied.drain() {
            if let Some(unit) = roster.get_mut(&id) {
                record.remove_from(unit);
            }
        }
        self.is_active = false;
        self.is_coordinating = false;
        tracing::debug!(pod = ?self.id, "pod deactivated");
        true
    }

    /// Terminal once every member is dead. Checked, not automatic.
    pub fn is_defeated(&self, roster: &Roster) -> bool {
        self.member_ids
            .iter()
            .all(|id| roster.get(id).map_or(true, |u| !u.is_alive()))
    }

    // === COORDINATION ===

    /// Archetype behavior dispatch: apply this pod's behavior delta to
    /// every living member. Deltas compound per call; the turn loop
    /// invokes this at most once per unit-turn.
    pub fn coordinate_actions(&mut self, roster: &mut Roster) {
        let delta = self.archetype.behavior_delta();
        for id in &self.member_ids {
            let Some(unit) = roster.get_mut(id) else {
                continue;
            };
            if !unit.is_alive() {
                continue;
            }
            if let Some(weapon) = unit.weapon.as_mut() {
                weapon.accuracy += delta.accuracy;
                weapon.damage += delta.damage;
            }
            unit.movement_range += delta.movement;
            unit.crit_chance += delta.crit;
            unit.initiative += delta.initiative;
            unit.psi_strength += delta.psi;
            if delta.enters_overwatch {
                unit.states.try_enter(UnitState::Overwatching);
            }
            if delta.conceals {
                unit.conceal();
            }
        }
        self.is_coordinating = true;
        self.tactics.record_use(self.archetype.signature_tactic());
        tracing::trace!(pod = ?self.id, archetype = ?self.archetype, "pod coordinated");
    }

    /// Per-turn entry point for the turn loop
    pub fn process_pod_turn(&mut self, roster: &mut Roster) {
        if !self.is_active || self.is_defeated(roster) {
            return;
        }
        self.coordinate_actions(roster);
    }

    // === LEARNING ===

    pub fn learn_from_encounter(&mut self, tactic: &str) {
        self.tactics.learn(tactic);
    }

    /// The pod gets better across encounters: one escalation level,
    /// every known tactic sharpened, every bonus field raised.
    pub fn escalate(&mut self) {
        self.escalation_level += 1;
        self.tactics.escalate_all(config().escalation_tactic_step);
        self.bonuses.escalate(config().escalation_bonus_step);
        tracing::debug!(pod = ?self.id, level = self.escalation_level, "pod escalated");
    }

    // === REINFORCEMENT ===

    /// Call in a wave. Side effects only on success; the cap is never
    /// exceeded.
    pub fn call_reinforcements(&mut self) -> bool {
        if self.reinforcement_count >= self.max_reinforcements {
            return false;
        }
        self.reinforcement_count += 1;
        self.is_reinforcing = true;
        true
    }
}
