//! Leveling: the XP curve and the level-up loop.

use crate::core::constants::{STAT_POINTS_PER_LEVEL, XP_CURVE_BASE, XP_LEVEL_MULTIPLIER};
use crate::data::buildings::{get_buildings, BuildingDef};
use crate::hero::Hero;

/// XP required to go from `level` to `level + 1`.
///
/// 100 at level 1, growing by 1.5x per level and truncated to a whole
/// number: 100, 150, 225, 337, ...
pub fn xp_to_level(level: u32) -> u64 {
    (XP_CURVE_BASE * XP_LEVEL_MULTIPLIER.powi(level as i32 - 1)).floor() as u64
}

#[derive(Debug, Clone, Default)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
    pub unlocked_buildings: Vec<&'static BuildingDef>,
}

impl LevelUpReport {
    pub fn leveled(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Consumes banked XP, raising the hero one level at a time until the
/// remainder no longer covers the next threshold. Each level grants stat
/// points and a full heal, and may unlock guild buildings.
///
/// `unlocked_buildings` is the persistent unlock list; buildings already
/// in it are never reported twice.
pub fn check_level_up(hero: &mut Hero, unlocked_buildings: &mut Vec<String>) -> LevelUpReport {
    let mut report = LevelUpReport {
        new_level: hero.level,
        ..Default::default()
    };

    while hero.xp >= hero.xp_to_level {
        hero.xp -= hero.xp_to_level;
        hero.level += 1;
        hero.xp_to_level = xp_to_level(hero.level);
        hero.stat_points += STAT_POINTS_PER_LEVEL;
        hero.heal_to_full();

        report.levels_gained += 1;
        report.new_level = hero.level;

        for building in get_buildings() {
            if hero.level >= building.unlock_level
                && !unlocked_buildings.iter().any(|id| id == building.id)
            {
                unlocked_buildings.push(building.id.to_string());
                report.unlocked_buildings.push(building);
            }
        }
    }

    report
}
