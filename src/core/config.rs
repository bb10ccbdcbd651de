//! Simulation configuration with documented constants
//!
//! All tuning numbers for the combat core are collected here with
//! explanations of their purpose and how they interact with each other.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{BastionError, Result};

/// Configuration for the combat core
///
/// These values have been tuned against the reference encounters.
/// Changing them will affect combat pacing and pod aggression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === ACTION ECONOMY ===
    /// Action points granted to every unit at the start of its turn
    ///
    /// Two points is the classic move-then-act budget: one point for
    /// repositioning, one for shooting/overwatch/abilities. Fractional
    /// costs (e.g. a 0.5 quick-use item) divide into this cleanly.
    pub default_action_points: f32,

    // === SUPPRESSION ===
    /// Flat accuracy penalty while suppressed (percentage points)
    ///
    /// Always derived from the suppressed state, never cached on the
    /// unit, so clearing suppression can never leave a stale penalty.
    pub suppression_accuracy_penalty: i32,

    // === CONCEALMENT ===
    /// Bonus accuracy for attacks launched from concealment
    ///
    /// Rewards keeping a unit hidden until the first shot. Applied by
    /// combat resolution on top of weapon accuracy.
    pub stealth_attack_bonus: i32,

    // === POD COORDINATION ===
    /// Distance (tiles) at which an inactive pod wakes up
    ///
    /// Any living member within this range of an enemy position
    /// triggers activation. Three tiles keeps pods from sniping the
    /// player across the map on turn one.
    pub pod_activation_radius: f32,

    // === RECOVERY ===
    /// Divisor applied to max health on revive
    ///
    /// A revived unit comes back at max_health / divisor (minimum 1).
    pub revive_health_divisor: i32,

    /// Damage per height level of a fall
    ///
    /// A two-story drop (height 4) at the default rate costs 20 health,
    /// enough to down a wounded soldier but not a fresh one.
    pub fall_damage_per_height: i32,

    // === OVERWATCH ===
    /// Percent chance an overwatching unit takes its reaction shot
    ///
    /// Rolled once per enemy move through the watched area. The roll
    /// consumes the overwatch state on success.
    pub overwatch_trigger_chance: i32,

    // === TACTIC LEARNING ===
    /// Effectiveness score for a newly learned tactic (0-100)
    pub tactic_initial_effectiveness: u8,

    /// Effectiveness gained each time a known tactic is reinforced
    pub tactic_learn_step: u8,

    /// Hard ceiling on tactic effectiveness
    pub tactic_effectiveness_cap: u8,

    // === ESCALATION ===
    /// Effectiveness added to every known tactic on escalation
    pub escalation_tactic_step: u8,

    /// Magnitude added to every coordination bonus field on escalation
    pub escalation_bonus_step: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Action economy
            default_action_points: 2.0,

            // Suppression
            suppression_accuracy_penalty: 30,

            // Concealment
            stealth_attack_bonus: 25,

            // Pod coordination
            pod_activation_radius: 3.0,

            // Recovery
            revive_health_divisor: 2,
            fall_damage_per_height: 5,

            // Overwatch
            overwatch_trigger_chance: 70,

            // Tactic learning
            tactic_initial_effectiveness: 50,
            tactic_learn_step: 5,
            tactic_effectiveness_cap: 100,

            // Escalation
            escalation_tactic_step: 10,
            escalation_bonus_step: 2,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text (missing fields keep defaults)
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.default_action_points <= 0.0 {
            return Err(BastionError::InvalidConfig(
                "default_action_points must be positive".into(),
            ));
        }

        if self.pod_activation_radius <= 0.0 {
            return Err(BastionError::InvalidConfig(
                "pod_activation_radius must be positive".into(),
            ));
        }

        if self.suppression_accuracy_penalty < 0 {
            return Err(BastionError::InvalidConfig(
                "suppression_accuracy_penalty must not be negative".into(),
            ));
        }

        if self.revive_health_divisor < 1 {
            return Err(BastionError::InvalidConfig(
                "revive_health_divisor must be at least 1".into(),
            ));
        }

        if !(0..=100).contains(&self.overwatch_trigger_chance) {
            return Err(BastionError::InvalidConfig(format!(
                "overwatch_trigger_chance ({}) must be within 0-100",
                self.overwatch_trigger_chance
            )));
        }

        if self.tactic_effectiveness_cap > 100 {
            return Err(BastionError::InvalidConfig(
                "tactic_effectiveness_cap must not exceed 100".into(),
            ));
        }

        if self.tactic_initial_effectiveness > self.tactic_effectiveness_cap {
            return Err(BastionError::InvalidConfig(format!(
                "tactic_initial_effectiveness ({}) must be <= tactic_effectiveness_cap ({})",
                self.tactic_initial_effectiveness, self.tactic_effectiveness_cap
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> std::result::Result<(), SimulationConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_action_points() {
        let mut cfg = SimulationConfig::default();
        cfg.default_action_points = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_initial_effectiveness_above_cap() {
        let mut cfg = SimulationConfig::default();
        cfg.tactic_initial_effectiveness = 80;
        cfg.tactic_effectiveness_cap = 60;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_toml_overrides_single_field() {
        let cfg = SimulationConfig::from_toml_str("suppression_accuracy_penalty = 40").unwrap();
        assert_eq!(cfg.suppression_accuracy_penalty, 40);
        // Untouched fields keep defaults
        assert_eq!(cfg.default_action_points, 2.0);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(SimulationConfig::from_toml_str("overwatch_trigger_chance = 250").is_err());
    }
}
