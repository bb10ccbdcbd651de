//! Unit state engine integration tests
//!
//! Exercises the combatant state machine end-to-end: vitals, the
//! concealment break policy, the suppression pair, the environmental
//! hazard table and reactive ability gating.

use last_bastion::core::types::{GridPosition, UnitKind};
use last_bastion::unit::{
    ActionType, Armor, EffectKind, ReactiveAbility, ReactiveKind, Unit, Weapon,
};

fn soldier() -> Unit {
    let mut unit = Unit::new("Mox", UnitKind::Soldier, 100);
    unit.weapon = Some(Weapon::assault_rifle());
    unit
}

/// Lethal overkill damage clamps health at zero and reports the death.
#[test]
fn test_overkill_damage_kills_and_clamps() {
    let mut unit = Unit::new("Rook", UnitKind::Soldier, 100);
    let died = unit.take_damage(150);
    assert!(died);
    assert_eq!(unit.health, 0);
}

/// Health stays within [0, max] across any damage/heal sequence.
#[test]
fn test_health_bounds_across_mixed_operations() {
    let mut unit = soldier();
    unit.take_damage(40);
    unit.heal(500);
    assert_eq!(unit.health, 100);

    unit.take_damage(95);
    unit.heal(3);
    assert_eq!(unit.health, 8);
    assert!(unit.health <= unit.max_health && unit.health >= 0);
}

/// The suppression pair: apply sets the state, the effect and the
/// derived penalty; the window expires with turn processing; removal
/// clears everything together.
#[test]
fn test_suppression_lifecycle() {
    let mut unit = soldier();
    assert!(!unit.is_suppressed());

    assert!(unit.apply_suppression(2));
    assert!(unit.is_suppressed());
    assert_eq!(unit.suppression_accuracy_penalty(), 30);
    assert!(unit.status.is_active(EffectKind::Suppressed));

    unit.process_status_effects();
    unit.process_status_effects();
    assert_eq!(unit.suppression_accuracy_penalty(), 0);

    assert!(unit.remove_suppression());
    assert!(!unit.is_suppressed());
    assert!(!unit.status.is_active(EffectKind::Suppressed));
    assert_eq!(unit.suppression_accuracy_penalty(), 0);

    // Removing again is a no-op
    assert!(!unit.remove_suppression());
}

/// A duration-1 effect is active exactly during the turn it was added.
#[test]
fn test_status_effect_single_turn_lifetime() {
    let mut unit = soldier();
    unit.apply_environmental_hazard(EffectKind::Marked, 1, 0);
    assert!(unit.status.is_active(EffectKind::Marked));

    unit.process_status_effects();
    assert!(!unit.status.is_active(EffectKind::Marked));
}

/// The concealment policy table is independent of unit state.
#[test]
fn test_concealment_break_policy() {
    let mut unit = soldier();
    assert!(!unit.can_maintain_concealment(ActionType::Attack));
    assert!(unit.can_maintain_concealment(ActionType::Move));
    assert!(unit.can_maintain_concealment(ActionType::Overwatch));

    // Same answers while concealed, suppressed, wounded
    unit.conceal();
    unit.apply_suppression(1);
    unit.take_damage(10);
    assert!(!unit.can_maintain_concealment(ActionType::Attack));
    assert!(unit.can_maintain_concealment(ActionType::Move));
}

/// Taking damage marks a concealed unit for the forced reveal the
/// caller performs.
#[test]
fn test_concealment_break_after_damage() {
    let mut unit = soldier();
    assert!(unit.conceal());
    assert!(!unit.should_break_concealment());

    unit.take_damage(5);
    assert!(unit.should_break_concealment());
    unit.force_break_concealment();
    assert!(!unit.is_concealed());
}

/// Damage-bearing hazards deal their intensity immediately; the
/// secondary effect table is kind-specific; markers do nothing numeric.
#[test]
fn test_environmental_hazard_table() {
    let mut burned = soldier();
    burned.apply_environmental_hazard(EffectKind::Burning, 2, 4);
    assert_eq!(burned.health, 96);

    let mut shocked = soldier();
    shocked.apply_environmental_hazard(EffectKind::Electrocution, 1, 3);
    assert_eq!(shocked.health, 97);
    assert!(shocked.status.is_active(EffectKind::Stunned));

    let mut irradiated = soldier();
    let initiative = irradiated.initiative;
    irradiated.apply_environmental_hazard(EffectKind::Radiation, 3, 2);
    assert_eq!(irradiated.initiative, initiative - 2);

    let mut frozen_feet = soldier();
    let movement = frozen_feet.movement_range;
    frozen_feet.apply_environmental_hazard(EffectKind::Frostbite, 2, 1);
    assert_eq!(frozen_feet.movement_range, movement - 1);

    let mut marked = soldier();
    marked.apply_environmental_hazard(EffectKind::Marked, 2, 50);
    assert_eq!(marked.health, 100);

    let mut watched = soldier();
    watched.apply_environmental_hazard(EffectKind::Overwatch, 1, 10);
    assert_eq!(watched.health, 100);
}

/// Dead units reject every mutation except the explicit revive.
#[test]
fn test_dead_unit_operations() {
    let mut unit = soldier();
    unit.take_damage(200);

    assert!(!unit.heal(10));
    assert!(!unit.conceal());
    assert!(!unit.apply_suppression(2));
    assert!(!unit.apply_environmental_hazard(EffectKind::Burning, 2, 3));
    assert!(!unit.stabilize());
    assert!(!unit.can_perform_move());
    assert!(!unit.can_perform_attack());

    assert!(unit.revive());
    assert_eq!(unit.health, 50);
    assert!(unit.can_perform_move());
}

/// Stabilize/medical-heal interplay.
#[test]
fn test_stabilize_and_medical_heal() {
    let mut unit = soldier();
    unit.take_damage(92);
    assert!(unit.stabilize());
    assert!(unit.is_stabilized());

    // Plain heal keeps the stabilized state
    unit.heal(5);
    assert!(unit.is_stabilized());

    assert!(unit.heal_with_medical(10));
    assert!(!unit.is_stabilized());
}

/// Bladestorm is gated by its own cooldown alone.
#[test]
fn test_bladestorm_cooldown_gate() {
    let mut unit = soldier();
    assert!(!unit.has_bladestorm());
    assert!(!unit.trigger_bladestorm());

    unit.reactives
        .push(ReactiveAbility::new(ReactiveKind::Bladestorm, 1));
    assert!(unit.has_bladestorm());

    assert!(unit.trigger_bladestorm());
    assert!(!unit.has_bladestorm());
    assert!(!unit.trigger_bladestorm());

    unit.process_reactive_cooldowns();
    assert!(unit.trigger_bladestorm());
}

/// Reactive kinds are matched by tag: a unit with only ReturnFire has
/// no bladestorm.
#[test]
fn test_reactive_kind_matching() {
    let mut unit = soldier();
    unit.reactives
        .push(ReactiveAbility::new(ReactiveKind::ReturnFire, 0));
    assert!(!unit.has_bladestorm());
    assert!(!unit.trigger_bladestorm());
    assert!(unit.trigger_reactive(ReactiveKind::ReturnFire));
}

/// Armor mitigation is consulted on every armored hit and absorbing to
/// zero is legal.
#[test]
fn test_armor_mitigation_path() {
    let mut unit = soldier();
    unit.armor = Some(Armor::plated());

    assert!(!unit.take_damage_with_armor(2));
    assert_eq!(unit.health, 100);

    assert!(!unit.take_damage_with_armor(7));
    assert_eq!(unit.health, 95);
}

/// Detection: revealed units are always seen; concealed units only
/// inside the observer's view range.
#[test]
fn test_detection_ranges() {
    let mut scout = Unit::new("Scout", UnitKind::Soldier, 80);
    scout.position = GridPosition::new(0, 0, 0);

    let mut sectoid = Unit::new("Sectoid", UnitKind::Alien, 30);
    sectoid.position = GridPosition::new(13, 0, 0);

    // Revealed: seen from anywhere
    assert!(scout.is_detected_by(&sectoid));

    // Concealed at 13 tiles, alien view range is 12
    scout.conceal();
    assert!(!scout.is_detected_by(&sectoid));

    sectoid.position = GridPosition::new(12, 0, 0);
    assert!(scout.is_detected_by(&sectoid));

    // The dead observe nothing
    sectoid.take_damage(99);
    assert!(!scout.is_detected_by(&sectoid));
}

/// A fall wounds, knocks prone and blocks movement until recovery.
#[test]
fn test_fall_and_recovery() {
    let mut unit = soldier();
    unit.conceal();

    assert!(!unit.suffer_fall(2));
    assert_eq!(unit.health, 90);
    assert!(unit.has_fallen());
    assert!(!unit.is_concealed());
    assert!(!unit.can_perform_move());
    assert!(!unit.can_conceal());

    assert!(unit.recover_footing());
    assert!(unit.can_perform_move());
    assert!(unit.can_conceal());
}

/// Capability predicates are conjunctions of life, action points and
/// the resource precondition.
#[test]
fn test_capability_predicates() {
    let mut unit = soldier();
    assert!(unit.can_perform_attack());
    assert!(unit.can_perform_overwatch());
    assert!(!unit.can_perform_throw());
    assert!(!unit.can_perform_ability("Run and Gun"));

    // Burn both points
    unit.actions.spend(1.0);
    unit.actions.spend(1.0);
    assert!(!unit.can_perform_attack());
    assert!(!unit.can_perform_move());
    assert!(!unit.can_perform_hack());
}
