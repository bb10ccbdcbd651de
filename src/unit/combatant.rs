//! The combatant entity: vitals, action economy, state machine and
//! every mutation/capability operation the combat layers call into.
//!
//! Failure semantics: invalid operations are no-ops returning false.
//! Callers use the paired `can_*` predicate to tell "nothing happened"
//! from "succeeded".

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::{GridPosition, UnitId, UnitKind};
use crate::unit::abilities::{
    Explosive, PsionicAbility, ReactiveAbility, ReactiveKind, SoldierAbility,
};
use crate::unit::actions::ActionEconomy;
use crate::unit::equipment::{Armor, Weapon};
use crate::unit::states::{StateSet, UnitState};
use crate::unit::status::{EffectKind, StatusEffectRegistry};

/// Action categories recognized by the concealment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Move,
    Attack,
    Overwatch,
    Hack,
    UseAbility,
    ThrowGrenade,
    Reload,
}

impl ActionType {
    /// Policy table: only moving and overwatching keep a unit hidden.
    /// Everything else unconditionally breaks concealment.
    pub fn preserves_concealment(&self) -> bool {
        matches!(self, ActionType::Move | ActionType::Overwatch)
    }
}

/// A single combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,

    // Vitals
    pub max_health: i32,
    pub health: i32,

    // Action economy
    pub actions: ActionEconomy,

    // Spatial
    pub position: GridPosition,
    pub movement_range: i32,
    pub view_range: i32,

    // Combat stats
    pub attack_range: i32,
    pub attack_damage: i32,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
    pub crit_chance: i32,
    pub crit_damage_multiplier: f32,
    pub initiative: i32,
    pub psi_strength: i32,
    pub defense: i32,

    // Discrete state machine
    pub states: StateSet,
    pub suppression_turns: u32,

    // Owned collections
    pub status: StatusEffectRegistry,
    pub abilities: Vec<SoldierAbility>,
    pub psionics: Vec<PsionicAbility>,
    pub reactives: Vec<ReactiveAbility>,
    pub explosives: Vec<Explosive>,
    pub mutations: Vec<String>,
}

impl Unit {
    pub fn new(name: &str, kind: UnitKind, max_health: i32) -> Self {
        let profile = kind.profile();
        Self {
            id: UnitId::new(),
            name: name.into(),
            kind,
            max_health,
            health: max_health,
            actions: ActionEconomy::new(config().default_action_points),
            position: GridPosition::default(),
            movement_range: profile.movement_range,
            view_range: profile.view_range,
            attack_range: 1,
            attack_damage: 2,
            weapon: None,
            armor: None,
            crit_chance: 0,
            crit_damage_multiplier: 1.5,
            initiative: profile.base_initiative,
            psi_strength: 0,
            defense: 0,
            states: StateSet::new(),
            suppression_turns: 0,
            status: StatusEffectRegistry::new(),
            abilities: Vec::new(),
            psionics: Vec::new(),
            reactives: Vec::new(),
            explosives: Vec::new(),
            mutations: Vec::new(),
        }
    }

    // === VITALS ===

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply raw damage, clamped at zero health. Returns whether the
    /// unit is dead after the call.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if amount > 0 && self.is_alive() {
            self.health = (self.health - amount).max(0);
            if self.health == 0 {
                self.on_death();
            }
        }
        !self.is_alive()
    }

    /// Route damage through worn armor first. Armor never fails; a hit
    /// absorbed down to zero damage is a legal outcome.
    pub fn take_damage_with_armor(&mut self, amount: i32) -> bool {
        let after_armor = match &self.armor {
            Some(armor) => armor.absorb(amount),
            None => amount,
        };
        self.take_damage(after_armor)
    }

    fn on_death(&mut self) {
        // A corpse holds no active states.
        self.states.clear();
        self.suppression_turns = 0;
        tracing::debug!(name = %self.name, "unit down");
    }

    /// Restore health, only while alive, clamped at max.
    pub fn heal(&mut self, amount: i32) -> bool {
        if !self.is_alive() || amount <= 0 {
            return false;
        }
        self.health = (self.health + amount).min(self.max_health);
        true
    }

    /// Medical heal: also clears the stabilized state.
    pub fn heal_with_medical(&mut self, amount: i32) -> bool {
        if !self.heal(amount) {
            return false;
        }
        self.states.leave(UnitState::Stabilized);
        true
    }

    /// Stabilize a critically wounded unit against bleeding out.
    pub fn stabilize(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.states.try_enter(UnitState::Stabilized)
    }

    /// Explicit revive from dead, back to half max health.
    pub fn revive(&mut self) -> bool {
        if self.is_alive() {
            return false;
        }
        self.health = (self.max_health / config().revive_health_divisor).max(1);
        true
    }

    // === CONCEALMENT ===

    pub fn is_concealed(&self) -> bool {
        self.states.contains(UnitState::Concealed)
    }

    pub fn can_conceal(&self) -> bool {
        self.is_alive() && !self.is_concealed() && !self.has_fallen()
    }

    pub fn conceal(&mut self) -> bool {
        if !self.can_conceal() {
            return false;
        }
        self.states.try_enter(UnitState::Concealed)
    }

    /// Unconditional: drops concealment if held.
    pub fn reveal(&mut self) {
        self.states.leave(UnitState::Concealed);
    }

    /// Pure predicate: has something happened that gives the unit away?
    /// True on any lost health, spent ammo, or active damaging hazard.
    /// Callers check this after every action and force the break.
    pub fn should_break_concealment(&self) -> bool {
        if self.health < self.max_health {
            return true;
        }
        if let Some(weapon) = &self.weapon {
            if weapon.has_spent_ammo() {
                return true;
            }
        }
        self.status
            .iter_active()
            .any(|e| e.kind.deals_immediate_damage())
    }

    pub fn force_break_concealment(&mut self) {
        self.reveal();
    }

    /// Policy table lookup, independent of unit state.
    pub fn can_maintain_concealment(&self, action: ActionType) -> bool {
        action.preserves_concealment()
    }

    // === SUPPRESSION ===

    pub fn is_suppressed(&self) -> bool {
        self.states.contains(UnitState::Suppressed)
    }

    /// Pin the unit under suppressive fire for the given turns. The
    /// paired status effect carries the accuracy penalty as intensity.
    pub fn apply_suppression(&mut self, turns: u32) -> bool {
        if !self.is_alive() || turns == 0 {
            return false;
        }
        self.states.try_enter(UnitState::Suppressed);
        self.status.remove_all(EffectKind::Suppressed);
        self.status.add(
            EffectKind::Suppressed,
            turns as i32,
            config().suppression_accuracy_penalty,
        );
        self.suppression_turns = turns;
        true
    }

    /// Symmetric inverse of `apply_suppression`: clears the state, the
    /// effect record and the turn counter together.
    pub fn remove_suppression(&mut self) -> bool {
        if !self.is_suppressed() {
            return false;
        }
        self.states.leave(UnitState::Suppressed);
        self.status.remove_all(EffectKind::Suppressed);
        self.suppression_turns = 0;
        true
    }

    /// Derived, never cached: the penalty exists exactly while the unit
    /// is suppressed with turns remaining.
    pub fn suppression_accuracy_penalty(&self) -> i32 {
        if self.is_suppressed() && self.suppression_turns > 0 {
            config().suppression_accuracy_penalty
        } else {
            0
        }
    }

    // === ENVIRONMENTAL HAZARDS ===

    /// Attach a hazard effect. Damage-bearing kinds deal their intensity
    /// immediately and apply their kind-specific secondary effect;
    /// marker kinds are recorded without a numeric effect.
    pub fn apply_environmental_hazard(
        &mut self,
        kind: EffectKind,
        duration: i32,
        intensity: i32,
    ) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status.add(kind, duration, intensity);
        if kind.deals_immediate_damage() {
            self.take_damage(intensity);
        }
        if self.is_alive() {
            match kind {
                EffectKind::Electrocution => {
                    self.status.add(EffectKind::Stunned, 1, 0);
                }
                EffectKind::Radiation => {
                    self.initiative -= 2;
                }
                EffectKind::Frostbite => {
                    self.movement_range = (self.movement_range - 1).max(0);
                }
                _ => {}
            }
        }
        true
    }

    // === TURN PROCESSING ===

    /// Once per turn: prune expired effects, decrement survivors, and
    /// count down the suppression window.
    pub fn process_status_effects(&mut self) {
        self.status.tick();
        self.suppression_turns = self.suppression_turns.saturating_sub(1);
    }

    pub fn reset_action_points(&mut self) {
        self.actions.reset();
    }

    /// Once per turn, before any availability query.
    pub fn process_ability_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.tick();
        }
        for psionic in &mut self.psionics {
            psionic.tick();
        }
    }

    /// Once per turn, before any availability query.
    pub fn process_reactive_cooldowns(&mut self) {
        for reactive in &mut self.reactives {
            reactive.tick();
        }
    }

    // === REACTIVE ABILITIES ===

    pub fn has_reactive(&self, kind: ReactiveKind) -> bool {
        self.reactives.iter().any(|r| r.kind == kind && r.is_ready())
    }

    /// Fire the matching reactive if its cooldown allows; the cooldown
    /// gate alone prevents double-triggering in one opportunity window.
    pub fn trigger_reactive(&mut self, kind: ReactiveKind) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.reactives
            .iter_mut()
            .find(|r| r.kind == kind)
            .map(|r| r.try_trigger())
            .unwrap_or(false)
    }

    pub fn has_bladestorm(&self) -> bool {
        self.has_reactive(ReactiveKind::Bladestorm)
    }

    pub fn trigger_bladestorm(&mut self) -> bool {
        self.trigger_reactive(ReactiveKind::Bladestorm)
    }

    // === CAPABILITY PREDICATES (pure) ===

    fn can_act(&self) -> bool {
        self.is_alive() && !self.status.is_active(EffectKind::Stunned)
    }

    pub fn can_perform_move(&self) -> bool {
        self.can_act() && self.actions.can_spend(1.0) && !self.has_fallen()
    }

    pub fn can_perform_attack(&self) -> bool {
        self.can_act()
            && self.actions.can_spend(1.0)
            && self.weapon.as_ref().is_some_and(|w| w.has_ammo())
    }

    pub fn can_perform_overwatch(&self) -> bool {
        self.can_perform_attack()
    }

    pub fn can_perform_hack(&self) -> bool {
        self.can_act() && self.actions.can_spend(1.0)
    }

    pub fn can_perform_throw(&self) -> bool {
        self.can_act() && self.actions.can_spend(1.0) && !self.explosives.is_empty()
    }

    pub fn can_perform_ability(&self, name: &str) -> bool {
        self.can_act()
            && self.actions.can_spend(1.0)
            && self.abilities.iter().any(|a| a.name == name && a.is_ready())
    }

    pub fn can_reload(&self) -> bool {
        self.can_act()
            && self.actions.can_spend(1.0)
            && self.weapon.as_ref().is_some_and(|w| w.has_spent_ammo())
    }

    // === WEAPON ACTIONS ===

    /// Spend one action point and one round. Callers then apply the
    /// concealment-break contract.
    pub fn fire_weapon(&mut self) -> bool {
        if !self.can_perform_attack() {
            return false;
        }
        let Some(weapon) = self.weapon.as_mut() else {
            return false;
        };
        weapon.expend_round();
        self.actions.spend(1.0);
        true
    }

    pub fn reload_weapon(&mut self) -> bool {
        if !self.can_reload() {
            return false;
        }
        if let Some(weapon) = self.weapon.as_mut() {
            weapon.reload();
        }
        self.actions.spend(1.0);
        true
    }

    // === OVERWATCH ===

    pub fn is_overwatching(&self) -> bool {
        self.states.contains(UnitState::Overwatching)
    }

    /// Hold fire on the watched area; consumes one action point.
    pub fn enter_overwatch(&mut self) -> bool {
        if !self.can_perform_overwatch() {
            return false;
        }
        if !self.states.try_enter(UnitState::Overwatching) {
            return false;
        }
        self.actions.spend(1.0);
        true
    }

    pub fn clear_overwatch(&mut self) {
        self.states.leave(UnitState::Overwatching);
    }

    /// Roll the reaction shot against an enemy move. A successful roll
    /// consumes the overwatch state and one round.
    pub fn overwatch_shot_ready(&mut self, rng: &mut impl Rng) -> bool {
        if !self.is_overwatching() {
            return false;
        }
        let fired = rng.gen_range(0..100) < config().overwatch_trigger_chance;
        if fired {
            self.clear_overwatch();
            if let Some(weapon) = self.weapon.as_mut() {
                weapon.expend_round();
            }
        }
        fired
    }

    // === FLANKING ===

    pub fn is_flanked(&self) -> bool {
        self.states.contains(UnitState::Flanked)
    }

    /// Set by combat resolution when cover geometry changes.
    pub fn set_flanked(&mut self, flanked: bool) {
        if flanked {
            self.states.try_enter(UnitState::Flanked);
        } else {
            self.states.leave(UnitState::Flanked);
        }
    }

    // === FALLING ===

    pub fn has_fallen(&self) -> bool {
        self.states.contains(UnitState::Fallen)
    }

    pub fn is_stabilized(&self) -> bool {
        self.states.contains(UnitState::Stabilized)
    }

    /// Take fall damage scaled by height. A surviving unit is knocked
    /// prone (movement blocked) until its footing is recovered.
    pub fn suffer_fall(&mut self, height: i32) -> bool {
        if height <= 0 || !self.is_alive() {
            return !self.is_alive();
        }
        let damage = height * config().fall_damage_per_height;
        let died = self.take_damage(damage);
        if !died {
            self.states.leave(UnitState::Concealed);
            self.states.leave(UnitState::Overwatching);
            self.states.try_enter(UnitState::Fallen);
        }
        died
    }

    /// Cleared externally once the unit spends its recovery.
    pub fn recover_footing(&mut self) -> bool {
        self.states.leave(UnitState::Fallen)
    }

    // === COMBAT QUERIES ===

    /// Base plus weapon critical chance, in percentage points.
    pub fn total_critical_chance(&self) -> i32 {
        let weapon_bonus = self.weapon.as_ref().map_or(0, |w| w.crit_bonus);
        self.crit_chance + weapon_bonus
    }

    /// Accuracy bonus for attacking from concealment.
    pub fn stealth_attack_bonus(&self) -> i32 {
        if self.is_concealed() {
            config().stealth_attack_bonus
        } else {
            0
        }
    }

    pub fn roll_critical(&self, rng: &mut impl Rng) -> bool {
        rng.gen_range(0..100) < self.total_critical_chance()
    }

    pub fn critical_damage(&self, base: i32) -> i32 {
        (base as f32 * self.crit_damage_multiplier).round() as i32
    }

    /// Visibility check: revealed units are always detected; concealed
    /// units only within the observer's view range.
    pub fn is_detected_by(&self, observer: &Unit) -> bool {
        if !self.is_alive() || !observer.is_alive() {
            return false;
        }
        if !self.is_concealed() {
            return true;
        }
        self.position.distance(&observer.position) <= observer.view_range as f32
    }

    // === MUTATIONS ===

    pub fn add_mutation(&mut self, tag: &str) {
        if !self.has_mutation(tag) {
            self.mutations.push(tag.into());
        }
    }

    pub fn has_mutation(&self, tag: &str) -> bool {
        self.mutations.iter().any(|m| m == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soldier() -> Unit {
        let mut unit = Unit::new("Jane Kelly", UnitKind::Soldier, 100);
        unit.weapon = Some(Weapon::assault_rifle());
        unit
    }

    #[test]
    fn test_lethal_damage_kills_and_clamps() {
        let mut unit = soldier();
        let died = unit.take_damage(150);
        assert!(died);
        assert_eq!(unit.health, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut unit = soldier();
        unit.take_damage(30);
        assert!(unit.heal(50));
        assert_eq!(unit.health, 100);
    }

    #[test]
    fn test_dead_unit_cannot_heal() {
        let mut unit = soldier();
        unit.take_damage(150);
        assert!(!unit.heal(10));
        assert_eq!(unit.health, 0);
    }

    #[test]
    fn test_revive_restores_half_health() {
        let mut unit = soldier();
        unit.take_damage(200);
        assert!(unit.revive());
        assert_eq!(unit.health, 50);
        // Reviving a living unit is a no-op
        assert!(!unit.revive());
    }

    #[test]
    fn test_armor_routes_damage() {
        let mut unit = soldier();
        unit.armor = Some(Armor::plated());
        unit.take_damage_with_armor(5);
        assert_eq!(unit.health, 97);
    }

    #[test]
    fn test_armor_can_reduce_to_zero() {
        let mut unit = soldier();
        unit.armor = Some(Armor::carapace());
        let died = unit.take_damage_with_armor(2);
        assert!(!died);
        assert_eq!(unit.health, 100);
    }

    #[test]
    fn test_death_clears_states() {
        let mut unit = soldier();
        unit.conceal();
        unit.apply_suppression(2);
        unit.take_damage(500);
        assert!(unit.states.is_empty());
        assert_eq!(unit.suppression_turns, 0);
    }

    #[test]
    fn test_conceal_is_guarded() {
        let mut unit = soldier();
        assert!(unit.conceal());
        assert!(!unit.conceal()); // already concealed
        unit.reveal();
        assert!(unit.conceal());
    }

    #[test]
    fn test_medical_heal_clears_stabilized() {
        let mut unit = soldier();
        unit.take_damage(90);
        assert!(unit.stabilize());
        assert!(unit.is_stabilized());
        assert!(unit.heal_with_medical(20));
        assert!(!unit.is_stabilized());
    }

    #[test]
    fn test_should_break_concealment_on_lost_health() {
        let mut unit = soldier();
        unit.conceal();
        assert!(!unit.should_break_concealment());
        unit.take_damage(10);
        assert!(unit.should_break_concealment());
    }

    #[test]
    fn test_should_break_concealment_on_spent_ammo() {
        let mut unit = soldier();
        unit.conceal();
        unit.weapon.as_mut().unwrap().expend_round();
        assert!(unit.should_break_concealment());
    }

    #[test]
    fn test_should_break_concealment_on_hazard() {
        let mut unit = soldier();
        // Marker kinds do not give the unit away
        unit.apply_environmental_hazard(EffectKind::Marked, 2, 0);
        assert!(!unit.should_break_concealment());

        let mut burning = soldier();
        burning.apply_environmental_hazard(EffectKind::Burning, 2, 0);
        assert!(burning.should_break_concealment());
    }

    #[test]
    fn test_suppression_penalty_is_derived() {
        let mut unit = soldier();
        assert_eq!(unit.suppression_accuracy_penalty(), 0);

        assert!(unit.apply_suppression(2));
        assert!(unit.is_suppressed());
        assert_eq!(unit.suppression_accuracy_penalty(), 30);

        unit.process_status_effects();
        unit.process_status_effects();
        // Window elapsed: penalty gone even before the explicit removal
        assert_eq!(unit.suppression_accuracy_penalty(), 0);

        assert!(unit.remove_suppression());
        assert!(!unit.is_suppressed());
        assert!(!unit.status.is_active(EffectKind::Suppressed));
    }

    #[test]
    fn test_electrocution_stuns() {
        let mut unit = soldier();
        unit.apply_environmental_hazard(EffectKind::Electrocution, 2, 5);
        assert_eq!(unit.health, 95);
        assert!(unit.status.is_active(EffectKind::Stunned));
        assert!(!unit.can_perform_move());
        assert!(!unit.can_perform_attack());
    }

    #[test]
    fn test_radiation_saps_initiative() {
        let mut unit = soldier();
        let before = unit.initiative;
        unit.apply_environmental_hazard(EffectKind::Radiation, 3, 2);
        assert_eq!(unit.initiative, before - 2);
    }

    #[test]
    fn test_frostbite_slows() {
        let mut unit = soldier();
        let before = unit.movement_range;
        unit.apply_environmental_hazard(EffectKind::Frostbite, 2, 1);
        assert_eq!(unit.movement_range, before - 1);
    }

    #[test]
    fn test_marker_hazard_deals_no_damage() {
        let mut unit = soldier();
        unit.apply_environmental_hazard(EffectKind::Stunned, 1, 99);
        assert_eq!(unit.health, 100);
    }

    #[test]
    fn test_capability_requires_action_points() {
        let mut unit = soldier();
        assert!(unit.can_perform_attack());
        unit.actions.spend(2.0);
        assert!(!unit.can_perform_attack());
        assert!(!unit.can_perform_move());
    }

    #[test]
    fn test_attack_requires_ammo() {
        let mut unit = soldier();
        for _ in 0..4 {
            assert!(unit.fire_weapon());
            unit.reset_action_points();
        }
        assert!(!unit.can_perform_attack());
        assert!(unit.can_reload());
        assert!(unit.reload_weapon());
        assert!(unit.can_perform_attack());
    }

    #[test]
    fn test_throw_requires_explosive() {
        let mut unit = soldier();
        assert!(!unit.can_perform_throw());
        unit.explosives.push(Explosive::frag_grenade());
        assert!(unit.can_perform_throw());
    }

    #[test]
    fn test_fall_blocks_movement_until_recovered() {
        let mut unit = soldier();
        assert!(!unit.suffer_fall(3));
        assert_eq!(unit.health, 85);
        assert!(unit.has_fallen());
        assert!(!unit.can_perform_move());
        assert!(!unit.can_conceal());

        assert!(unit.recover_footing());
        assert!(unit.can_perform_move());
    }

    #[test]
    fn test_bladestorm_gate_is_the_cooldown() {
        let mut unit = soldier();
        assert!(!unit.has_bladestorm());
        unit.reactives.push(ReactiveAbility::new(ReactiveKind::Bladestorm, 1));

        assert!(unit.has_bladestorm());
        assert!(unit.trigger_bladestorm());
        // Same opportunity window: blocked purely by the cooldown
        assert!(!unit.trigger_bladestorm());

        unit.process_reactive_cooldowns();
        assert!(unit.trigger_bladestorm());
    }

    #[test]
    fn test_detection_respects_concealment_range() {
        let mut hidden = soldier();
        hidden.conceal();
        hidden.position = GridPosition::new(20, 0, 0);

        let mut observer = Unit::new("Sectoid", UnitKind::Alien, 30);
        observer.position = GridPosition::new(0, 0, 0);

        // Concealed and out of the observer's 12-tile view range
        assert!(!hidden.is_detected_by(&observer));

        hidden.position = GridPosition::new(10, 0, 0);
        assert!(hidden.is_detected_by(&observer));

        hidden.position = GridPosition::new(20, 0, 0);
        hidden.reveal();
        assert!(hidden.is_detected_by(&observer));
    }

    #[test]
    fn test_stealth_attack_bonus() {
        let mut unit = soldier();
        assert_eq!(unit.stealth_attack_bonus(), 0);
        unit.conceal();
        assert_eq!(unit.stealth_attack_bonus(), 25);
    }

    #[test]
    fn test_total_crit_includes_weapon() {
        let mut unit = soldier();
        unit.crit_chance = 5;
        assert_eq!(unit.total_critical_chance(), 15);
    }

    #[test]
    fn test_concealment_policy_table() {
        let unit = soldier();
        assert!(unit.can_maintain_concealment(ActionType::Move));
        assert!(unit.can_maintain_concealment(ActionType::Overwatch));
        assert!(!unit.can_maintain_concealment(ActionType::Attack));
        assert!(!unit.can_maintain_concealment(ActionType::Hack));
        assert!(!unit.can_maintain_concealment(ActionType::UseAbility));
        assert!(!unit.can_maintain_concealment(ActionType::ThrowGrenade));
        assert!(!unit.can_maintain_concealment(ActionType::Reload));
    }

    #[test]
    fn test_overwatch_consumes_point_and_ammo_on_trigger() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);

        let mut unit = soldier();
        assert!(unit.enter_overwatch());
        assert!(unit.is_overwatching());
        assert_eq!(unit.actions.points(), 1.0);

        // With the default 70% trigger chance a handful of rolls fires
        let mut fired = false;
        for _ in 0..10 {
            if unit.overwatch_shot_ready(&mut rng) {
                fired = true;
                break;
            }
        }
        assert!(fired);
        assert!(!unit.is_overwatching());
        assert!(unit.weapon.as_ref().unwrap().has_spent_ammo());
    }

    #[test]
    fn test_mutations_deduplicate() {
        let mut unit = Unit::new("Chryssalid", UnitKind::Alien, 40);
        unit.add_mutation("acid-blood");
        unit.add_mutation("acid-blood");
        assert_eq!(unit.mutations.len(), 1);
        assert!(unit.has_mutation("acid-blood"));
    }
}
