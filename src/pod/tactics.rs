//! Adaptive tactic learning
//!
//! A pod's known tactics carry an effectiveness score (0-100) that grows
//! through repeated encounters and escalation, plus a usage counter.
//! Scores are monotonic: nothing in this core lowers them.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::config;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TacticBook {
    effectiveness: AHashMap<String, u8>,
    usage: AHashMap<String, u32>,
}

impl TacticBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the starting tactics of a freshly constructed pod
    pub fn seeded(names: &[&str]) -> Self {
        let initial = config().tactic_initial_effectiveness;
        let mut book = Self::new();
        for name in names {
            book.effectiveness.insert((*name).into(), initial);
        }
        book
    }

    pub fn knows(&self, tactic: &str) -> bool {
        self.effectiveness.contains_key(tactic)
    }

    pub fn effectiveness_of(&self, tactic: &str) -> Option<u8> {
        self.effectiveness.get(tactic).copied()
    }

    /// Learn from an encounter: a new tactic starts at the configured
    /// initial score; a known one gains the learn step, capped.
    pub fn learn(&mut self, tactic: &str) {
        let cfg = config();
        self.effectiveness
            .entry(tactic.into())
            .and_modify(|score| {
                *score = score.saturating_add(cfg.tactic_learn_step).min(cfg.tactic_effectiveness_cap);
            })
            .or_insert(cfg.tactic_initial_effectiveness);
    }

    /// Escalation sweep: every known tactic gains the step, capped.
    pub fn escalate_all(&mut self, step: u8) {
        let cap = config().tactic_effectiveness_cap;
        for score in self.effectiveness.values_mut() {
            *score = score.saturating_add(step).min(cap);
        }
    }

    pub fn record_use(&mut self, tactic: &str) {
        *self.usage.entry(tactic.into()).or_insert(0) += 1;
    }

    pub fn usage_count(&self, tactic: &str) -> u32 {
        self.usage.get(tactic).copied().unwrap_or(0)
    }

    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.effectiveness.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.effectiveness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effectiveness.is_empty()
    }
}
