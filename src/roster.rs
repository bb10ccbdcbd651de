//! Id-keyed unit storage
//!
//! The orchestrator owns every unit through the roster; pods hold
//! `UnitId`s only and look members up here. Spawn order is kept so
//! iteration stays deterministic.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::UnitId;
use crate::unit::Unit;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    units: AHashMap<UnitId, Unit>,
    spawn_order: Vec<UnitId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit: Unit) -> UnitId {
        let id = unit.id;
        if self.units.insert(id, unit).is_none() {
            self.spawn_order.push(id);
        }
        id
    }

    pub fn get(&self, id: &UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    pub fn get_mut(&mut self, id: &UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id)
    }

    pub fn remove(&mut self, id: &UnitId) -> Option<Unit> {
        let removed = self.units.remove(id);
        if removed.is_some() {
            self.spawn_order.retain(|existing| existing != id);
        }
        removed
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.units.contains_key(id)
    }

    /// Unit ids in spawn order
    pub fn ids(&self) -> &[UnitId] {
        &self.spawn_order
    }

    /// Units in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.spawn_order.iter().filter_map(|id| self.units.get(id))
    }

    /// Living units in spawn order
    pub fn living(&self) -> impl Iterator<Item = &Unit> {
        self.iter().filter(|u| u.is_alive())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
