//! The hero: base stats, equipment, and leveling.

pub mod equipment;
pub mod progression;
pub mod stats;

use serde::{Deserialize, Serialize};

use crate::core::constants::XP_CURVE_BASE;
use crate::hero::equipment::Equipment;
use crate::hero::stats::{DerivedStats, Stats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub level: u32,
    pub xp: u64,
    pub xp_to_level: u64,
    pub gold: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub stats: Stats,
    pub stat_points: u32,
    pub click_damage: u32,
    pub equipment: Equipment,
}

impl Hero {
    pub fn new() -> Self {
        let mut hero = Self {
            level: 1,
            xp: 0,
            xp_to_level: XP_CURVE_BASE as u64,
            gold: 0,
            hp: 0,
            max_hp: 0,
            stats: Stats::new(),
            stat_points: 0,
            click_damage: 1,
            equipment: Equipment::starting_gear(),
        };
        let derived = hero.derived();
        hero.max_hp = derived.max_hp;
        hero.hp = derived.max_hp;
        hero
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats::calculate(&self.stats, &self.equipment)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Applies a new max HP while keeping the current HP at the same
    /// fraction of the maximum. Used when VIT changes.
    pub fn rescale_hp(&mut self, new_max_hp: u32) {
        let fraction = if self.max_hp > 0 {
            self.hp as f64 / self.max_hp as f64
        } else {
            1.0
        };
        self.max_hp = new_max_hp;
        self.hp = ((new_max_hp as f64 * fraction) as u32).min(new_max_hp);
    }

    /// Applies a new max HP and adds a flat amount of current HP, clamped
    /// to the new maximum. Used when armor is bought or improved.
    pub fn raise_hp(&mut self, new_max_hp: u32, heal: u32) {
        self.max_hp = new_max_hp;
        self.hp = (self.hp + heal).min(new_max_hp);
    }

    pub fn heal_to_full(&mut self) {
        let derived = self.derived();
        self.max_hp = derived.max_hp;
        self.hp = derived.max_hp;
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hero() {
        let hero = Hero::new();
        assert_eq!(hero.level, 1);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.xp_to_level, 100);
        assert_eq!(hero.gold, 0);
        assert_eq!(hero.click_damage, 1);
        // Starter gear: 50 + 5*10 + 10 armor
        assert_eq!(hero.max_hp, 110);
        assert_eq!(hero.hp, hero.max_hp);
    }

    #[test]
    fn test_take_damage_no_underflow() {
        let mut hero = Hero::new();
        hero.take_damage(5000);
        assert_eq!(hero.hp, 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_rescale_hp_preserves_fraction() {
        let mut hero = Hero::new();
        hero.hp = 55; // Half of 110
        hero.rescale_hp(200);
        assert_eq!(hero.hp, 100);
        assert_eq!(hero.max_hp, 200);
    }

    #[test]
    fn test_raise_hp_clamps_to_max() {
        let mut hero = Hero::new();
        hero.hp = 105;
        hero.raise_hp(120, 30);
        assert_eq!(hero.max_hp, 120);
        assert_eq!(hero.hp, 120);
    }
}
