//! Weapons and armor consumed by the unit state engine
//!
//! Supplied by the (external) equipment system; units own their
//! instances exclusively. Named presets cover the common loadouts.

use serde::{Deserialize, Serialize};

/// An equipped ranged weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Base hit chance contribution (percentage points)
    pub accuracy: i32,
    pub damage: i32,
    /// Critical chance contribution (percentage points)
    pub crit_bonus: i32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Effective range in tiles
    pub range: i32,
}

impl Weapon {
    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    /// Has any ammo been fired since the last reload?
    pub fn has_spent_ammo(&self) -> bool {
        self.ammo < self.max_ammo
    }

    /// Spend one round. No-op returning false on an empty magazine.
    pub fn expend_round(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn reload(&mut self) {
        self.ammo = self.max_ammo;
    }

    /// Standard-issue rifle
    pub fn assault_rifle() -> Self {
        Self {
            name: "Assault Rifle".into(),
            accuracy: 70,
            damage: 4,
            crit_bonus: 10,
            ammo: 4,
            max_ammo: 4,
            range: 17,
        }
    }

    /// Close-quarters scattergun
    pub fn shotgun() -> Self {
        Self {
            name: "Shotgun".into(),
            accuracy: 60,
            damage: 6,
            crit_bonus: 20,
            ammo: 4,
            max_ammo: 4,
            range: 10,
        }
    }

    /// Alien plasma rifle
    pub fn plasma_rifle() -> Self {
        Self {
            name: "Plasma Rifle".into(),
            accuracy: 75,
            damage: 7,
            crit_bonus: 15,
            ammo: 3,
            max_ammo: 3,
            range: 18,
        }
    }
}

/// Worn armor. Mitigation is consulted on every armored hit and never
/// fails; absorbing a hit down to zero damage is a legal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    /// Flat damage absorbed per hit
    pub mitigation: i32,
    /// Defense contribution (enemy aim penalty)
    pub dodge_bonus: i32,
}

impl Armor {
    /// Route incoming damage through mitigation
    pub fn absorb(&self, amount: i32) -> i32 {
        (amount - self.mitigation).max(0)
    }

    /// Basic kevlar weave
    pub fn kevlar() -> Self {
        Self {
            name: "Kevlar Vest".into(),
            mitigation: 1,
            dodge_bonus: 0,
        }
    }

    /// Plated combat armor
    pub fn plated() -> Self {
        Self {
            name: "Plated Armor".into(),
            mitigation: 2,
            dodge_bonus: 5,
        }
    }

    /// Alien chitin carapace
    pub fn carapace() -> Self {
        Self {
            name: "Carapace".into(),
            mitigation: 3,
            dodge_bonus: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expend_and_reload_cycle() {
        let mut rifle = Weapon::assault_rifle();
        assert!(!rifle.has_spent_ammo());

        assert!(rifle.expend_round());
        assert!(rifle.has_spent_ammo());
        assert!(rifle.has_ammo());

        rifle.reload();
        assert!(!rifle.has_spent_ammo());
        assert_eq!(rifle.ammo, rifle.max_ammo);
    }

    #[test]
    fn test_empty_magazine_refuses_fire() {
        let mut rifle = Weapon::assault_rifle();
        for _ in 0..rifle.max_ammo {
            assert!(rifle.expend_round());
        }
        assert!(!rifle.has_ammo());
        assert!(!rifle.expend_round());
    }

    #[test]
    fn test_armor_absorbs_flat_amount() {
        let armor = Armor::plated();
        assert_eq!(armor.absorb(5), 3);
    }

    #[test]
    fn test_armor_can_absorb_to_zero() {
        let armor = Armor::carapace();
        assert_eq!(armor.absorb(2), 0);
        assert_eq!(armor.absorb(3), 0);
    }
}
