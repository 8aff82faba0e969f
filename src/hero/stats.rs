//! Effective and derived combat stats.
//!
//! Both calculations are pure functions of hero state. Callers are
//! responsible for re-deriving whenever base stats, equipment, or
//! improvement levels change, and for reconciling current HP against
//! the new maximum.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::hero::equipment::{Equipment, ItemStat};

/// The four trainable base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Strength,
    Vitality,
    Agility,
    Luck,
}

impl StatKind {
    pub fn all() -> [StatKind; 4] {
        [
            StatKind::Strength,
            StatKind::Vitality,
            StatKind::Agility,
            StatKind::Luck,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Vitality => "VIT",
            StatKind::Agility => "AGI",
            StatKind::Luck => "LUK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub vitality: u32,
    pub agility: u32,
    pub luck: u32,
}

impl Stats {
    /// A fresh hero starts with 5 in everything.
    pub fn new() -> Self {
        Self {
            strength: 5,
            vitality: 5,
            agility: 5,
            luck: 5,
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Vitality => self.vitality,
            StatKind::Agility => self.agility,
            StatKind::Luck => self.luck,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Strength => self.strength = value,
            StatKind::Vitality => self.vitality = value,
            StatKind::Agility => self.agility = value,
            StatKind::Luck => self.luck = value,
        }
    }

    pub fn increment(&mut self, kind: StatKind) {
        self.set(kind, self.get(kind) + 1);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

/// Base stats plus the accessory bonus. An "all stats" accessory adds its
/// value to all four; a single-stat accessory adds to the named one.
pub fn effective_stats(base: &Stats, equipment: &Equipment) -> Stats {
    let mut stats = *base;
    if let Some(accessory) = &equipment.accessory {
        match accessory.stat {
            ItemStat::All => {
                for kind in StatKind::all() {
                    stats.set(kind, stats.get(kind) + accessory.value);
                }
            }
            ItemStat::Single(kind) => {
                stats.set(kind, stats.get(kind) + accessory.value);
            }
            // Damage/MaxHp bonuses apply in the derived formulas, not here.
            ItemStat::Damage | ItemStat::MaxHp => {}
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStats {
    pub damage: u32,
    pub max_hp: u32,
    pub crit_chance_percent: f64,
    pub attack_interval_ms: u32,
    pub gold_bonus: f64,
}

impl DerivedStats {
    /// Calculates derived combat stats from base stats and equipment.
    ///
    /// Weapon and armor contribute their base value plus the flat
    /// improvement bonus per forge level; improvement bonuses only count
    /// while the matching slot is filled.
    pub fn calculate(base: &Stats, equipment: &Equipment) -> Self {
        let stats = effective_stats(base, equipment);

        let mut damage = BASE_DAMAGE + stats.strength;
        if let Some(weapon) = &equipment.weapon {
            damage += weapon.value + equipment.weapon_level * IMPROVE_BONUS_WEAPON;
        }

        let mut max_hp = BASE_HP + stats.vitality * HP_PER_VIT;
        if let Some(armor) = &equipment.armor {
            max_hp += armor.value + equipment.armor_level * IMPROVE_BONUS_ARMOR;
        }

        let crit_chance_percent = (BASE_CRIT_CHANCE_PERCENT
            + stats.luck as f64 * CRIT_CHANCE_PER_LUK)
            .min(CRIT_CHANCE_CAP_PERCENT);

        let attack_interval_ms = ATTACK_INTERVAL_BASE_MS
            .saturating_sub(stats.agility * ATTACK_INTERVAL_PER_AGI_MS)
            .max(ATTACK_INTERVAL_FLOOR_MS);

        let gold_bonus = 1.0 + stats.luck as f64 * GOLD_BONUS_PER_LUK;

        Self {
            damage,
            max_hp,
            crit_chance_percent,
            attack_interval_ms,
            gold_bonus,
        }
    }

    pub fn attack_interval_seconds(&self) -> f64 {
        self.attack_interval_ms as f64 / 1000.0
    }
}
