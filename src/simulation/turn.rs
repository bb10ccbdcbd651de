//! Turn loop helpers and the skirmish harness
//!
//! The harness plays the orchestrator role the combat core expects:
//! per-turn upkeep in the contractual order, pod activation by squad
//! proximity, pod coordination, and a simple exchange of fire. All
//! randomness flows through one seeded generator, so identical seeds
//! replay identical battles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::types::{GridPosition, Turn, UnitId, UnitKind};
use crate::pod::{AlienPod, PodArchetype};
use crate::roster::Roster;
use crate::unit::{ActionType, Armor, Unit, Weapon};

/// Once-per-turn unit upkeep, in the contractual order: action points
/// first, then ability/reactive cooldowns (before any availability
/// query), then status effects (prune, then decrement).
pub fn run_unit_upkeep(unit: &mut Unit) {
    unit.reset_action_points();
    unit.process_ability_cooldowns();
    unit.process_reactive_cooldowns();
    unit.process_status_effects();
}

/// Events generated during a skirmish turn, for logs and reports
#[derive(Debug, Clone, Serialize)]
pub enum SkirmishEvent {
    PodActivated {
        archetype: PodArchetype,
    },
    Shot {
        attacker: String,
        target: String,
        damage: i32,
        critical: bool,
    },
    Missed {
        attacker: String,
        target: String,
    },
    UnitKilled {
        name: String,
    },
    ReinforcementsCalled {
        archetype: PodArchetype,
        wave: u32,
    },
}

/// End-of-battle summary
#[derive(Debug, Clone, Serialize)]
pub struct SkirmishReport {
    pub outcome: String,
    pub turns: Turn,
    pub squad_alive: usize,
    pub aliens_alive: usize,
    pub pods_activated: usize,
    pub reinforcement_waves: u32,
    pub seed: u64,
}

/// A deterministic headless skirmish
pub struct Skirmish {
    pub roster: Roster,
    pub pods: Vec<AlienPod>,
    squad: Vec<UnitId>,
    turn: Turn,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Skirmish {
    pub fn new(seed: u64) -> Self {
        Self {
            roster: Roster::new(),
            pods: Vec::new(),
            squad: Vec::new(),
            turn: 0,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn squad(&self) -> &[UnitId] {
        &self.squad
    }

    /// Add a soldier with the standard loadout
    pub fn add_soldier(&mut self, name: &str, position: GridPosition) -> UnitId {
        let mut unit = Unit::new(name, UnitKind::Soldier, 100);
        unit.weapon = Some(Weapon::assault_rifle());
        unit.armor = Some(Armor::kevlar());
        unit.position = position;
        let id = self.roster.insert(unit);
        self.squad.push(id);
        id
    }

    /// Add a pod of the given archetype and size around a position
    pub fn add_pod(&mut self, archetype: PodArchetype, size: u32, position: GridPosition) {
        let mut pod = AlienPod::new(archetype);
        for offset in 0..size {
            let id = self
                .roster
                .insert(Self::make_alien(archetype, offset, position));
            pod.add_member(id, &mut self.roster);
        }
        self.pods.push(pod);
    }

    fn make_alien(archetype: PodArchetype, offset: u32, position: GridPosition) -> Unit {
        let mut unit = Unit::new(
            &format!("{archetype:?} {}", offset + 1),
            UnitKind::Alien,
            50,
        );
        unit.weapon = Some(Weapon::plasma_rifle());
        unit.armor = Some(Armor::carapace());
        unit.position = GridPosition::new(position.x + offset as i32, position.y, position.height);
        unit
    }

    fn living_squad_ids(&self) -> Vec<UnitId> {
        self.squad
            .iter()
            .copied()
            .filter(|id| self.roster.get(id).is_some_and(|u| u.is_alive()))
            .collect()
    }

    fn living_pod_member_ids(&self) -> Vec<UnitId> {
        self.pods
            .iter()
            .flat_map(|p| p.members().iter().copied())
            .filter(|id| self.roster.get(id).is_some_and(|u| u.is_alive()))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.living_squad_ids().is_empty() || self.living_pod_member_ids().is_empty()
    }

    /// Advance one full turn: upkeep, pod activation and coordination,
    /// reinforcements, then an exchange of fire.
    pub fn advance_turn(&mut self) -> Vec<SkirmishEvent> {
        self.turn += 1;
        let mut events = Vec::new();

        let all_ids: Vec<UnitId> = self.roster.ids().to_vec();
        for id in &all_ids {
            if let Some(unit) = self.roster.get_mut(id) {
                run_unit_upkeep(unit);
            }
        }

        self.process_pods(&mut events);
        self.exchange_fire(&mut events);

        tracing::debug!(turn = self.turn, events = events.len(), "turn complete");
        events
    }

    fn process_pods(&mut self, events: &mut Vec<SkirmishEvent>) {
        let squad_positions: Vec<GridPosition> = self
            .living_squad_ids()
            .iter()
            .filter_map(|id| self.roster.get(id))
            .map(|u| u.position)
            .collect();

        for index in 0..self.pods.len() {
            let pod = &mut self.pods[index];

            if squad_positions
                .iter()
                .any(|p| pod.should_activate(*p, &self.roster))
            {
                pod.activate(&mut self.roster);
                events.push(SkirmishEvent::PodActivated {
                    archetype: pod.archetype,
                });
            }

            pod.process_pod_turn(&mut self.roster);

            // A mauled pod calls for backup; the new arrival joins an
            // active pod and is bonused on arrival.
            let living = pod
                .members()
                .iter()
                .filter(|id| self.roster.get(id).is_some_and(|u| u.is_alive()))
                .count();
            if pod.is_active
                && living > 0
                && living * 2 < pod.members().len()
                && pod.call_reinforcements()
            {
                let wave = pod.reinforcement_count();
                let arrival = Self::make_alien(pod.archetype, wave + 10, pod.position());
                let id = self.roster.insert(arrival);
                pod.add_member(id, &mut self.roster);
                events.push(SkirmishEvent::ReinforcementsCalled {
                    archetype: pod.archetype,
                    wave,
                });
            }

            pod.refresh_position(&self.roster);
        }
    }

    fn exchange_fire(&mut self, events: &mut Vec<SkirmishEvent>) {
        let soldiers = self.living_squad_ids();
        for attacker in soldiers {
            let targets = self.living_pod_member_ids();
            if let Some(target) = self.nearest_visible(attacker, &targets) {
                self.resolve_fire(attacker, target, events);
            }
        }

        let aliens = self.living_pod_member_ids();
        for attacker in aliens {
            let targets = self.living_squad_ids();
            if let Some(target) = self.nearest_visible(attacker, &targets) {
                self.resolve_fire(attacker, target, events);
            }
        }
    }

    fn nearest_visible(&self, attacker_id: UnitId, candidates: &[UnitId]) -> Option<UnitId> {
        let attacker = self.roster.get(&attacker_id)?;
        candidates
            .iter()
            .filter_map(|id| self.roster.get(id).map(|u| (*id, u)))
            .filter(|(_, u)| u.is_detected_by(attacker))
            .min_by(|(_, a), (_, b)| {
                let da = a.position.distance(&attacker.position);
                let db = b.position.distance(&attacker.position);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(id, _)| id)
    }

    fn resolve_fire(
        &mut self,
        attacker_id: UnitId,
        target_id: UnitId,
        events: &mut Vec<SkirmishEvent>,
    ) {
        // Out-of-ammo shooters spend the turn reloading instead.
        if self
            .roster
            .get(&attacker_id)
            .is_some_and(|a| !a.can_perform_attack())
        {
            if let Some(attacker) = self.roster.get_mut(&attacker_id) {
                attacker.reload_weapon();
            }
            return;
        }

        let (hit_chance, base_damage, critical, attacker_name) = {
            let Some(attacker) = self.roster.get(&attacker_id) else {
                return;
            };
            let Some(weapon) = attacker.weapon.as_ref() else {
                return;
            };
            let chance = (weapon.accuracy + attacker.stealth_attack_bonus()
                - attacker.suppression_accuracy_penalty())
            .clamp(5, 95);
            let critical = attacker.roll_critical(&mut self.rng);
            let damage = if critical {
                attacker.critical_damage(weapon.damage)
            } else {
                weapon.damage
            };
            (chance, damage, critical, attacker.name.clone())
        };

        let fired = self
            .roster
            .get_mut(&attacker_id)
            .map(|a| a.fire_weapon())
            .unwrap_or(false);
        if !fired {
            return;
        }

        let hit = self.rng.gen_range(0..100) < hit_chance;
        if hit {
            if let Some(target) = self.roster.get_mut(&target_id) {
                let name = target.name.clone();
                let died = target.take_damage_with_armor(base_damage);
                events.push(SkirmishEvent::Shot {
                    attacker: attacker_name.clone(),
                    target: name.clone(),
                    damage: base_damage,
                    critical,
                });
                if died {
                    events.push(SkirmishEvent::UnitKilled { name });
                }
            }
        } else if let Some(target) = self.roster.get(&target_id) {
            events.push(SkirmishEvent::Missed {
                attacker: attacker_name.clone(),
                target: target.name.clone(),
            });
        }

        // Concealment-break contract: attacking never maintains
        // concealment, and the predicate is re-checked after the action.
        if let Some(attacker) = self.roster.get_mut(&attacker_id) {
            if !attacker.can_maintain_concealment(ActionType::Attack) {
                attacker.force_break_concealment();
            }
            if attacker.should_break_concealment() {
                attacker.force_break_concealment();
            }
        }
    }

    pub fn report(&self) -> SkirmishReport {
        let squad_alive = self.living_squad_ids().len();
        let aliens_alive = self.living_pod_member_ids().len();
        let outcome = if squad_alive == 0 && aliens_alive == 0 {
            "mutual destruction"
        } else if aliens_alive == 0 {
            "squad victory"
        } else if squad_alive == 0 {
            "pod victory"
        } else {
            "ongoing"
        };
        SkirmishReport {
            outcome: outcome.into(),
            turns: self.turn,
            squad_alive,
            aliens_alive,
            pods_activated: self.pods.iter().filter(|p| p.is_active).count(),
            reinforcement_waves: self.pods.iter().map(|p| p.reinforcement_count()).sum(),
            seed: self.seed,
        }
    }
}
