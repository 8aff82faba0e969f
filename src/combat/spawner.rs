//! Enemy spawning for both zone flavors.
//!
//! Zones with authored stage tables roll straight from the table row;
//! zones without them derive numbers from the zone tier, enemy level,
//! and the bestiary base stats. Either way the boss wave comes out
//! strictly harder than any single normal wave.

use rand::Rng;

use crate::combat::types::Enemy;
use crate::core::constants::*;
use crate::data::zones::{get_enemy_type, EnemyTypeDef, ZoneDef};
use crate::data::DataError;

/// Spawns the enemy for a wave. `wave` is 1-based; `is_boss` selects the
/// zone's boss descriptor instead of the random pool.
pub fn spawn_enemy(
    zone: &ZoneDef,
    stage_index: usize,
    wave: u32,
    is_boss: bool,
    rng: &mut impl Rng,
) -> Result<Enemy, DataError> {
    let (template, level) = if is_boss {
        (get_enemy_type(zone.boss.enemy_type)?, zone.boss.level)
    } else {
        let id = zone.enemies[rng.gen_range(0..zone.enemies.len())];
        (get_enemy_type(id)?, zone.enemy_level)
    };

    match &zone.stage_stats {
        Some(rows) => {
            let row_index = if is_boss {
                BOSS_STAGE_INDEX
            } else {
                stage_index.min(rows.len() - 1)
            };
            let row = &rows[row_index];
            let hp = rng.gen_range(row.hp.0..=row.hp.1);
            let damage = rng.gen_range(row.damage.0..=row.damage.1);
            Ok(Enemy {
                name: template.name.to_string(),
                max_hp: hp,
                current_hp: hp,
                damage,
                gold_range: row.gold,
                xp_range: row.xp,
                is_boss,
            })
        }
        None => Ok(formula_enemy(zone, template, level, stage_index, wave, is_boss)),
    }
}

fn scaled_hp(base_hp: u32, level: u32) -> u32 {
    (base_hp as f64 * (1.0 + ENEMY_HP_PER_LEVEL * (level.saturating_sub(1)) as f64)).floor() as u32
}

fn normal_damage(tier: u32, stage_index: usize, wave: u32) -> u32 {
    BASE_ENEMY_DAMAGE
        + tier.saturating_sub(1) * (AREA_PROGRESS_MAX + AREA_DAMAGE_BONUS)
        + stage_index as u32
        + wave.saturating_sub(1)
}

fn formula_enemy(
    zone: &ZoneDef,
    template: &EnemyTypeDef,
    level: u32,
    stage_index: usize,
    wave: u32,
    is_boss: bool,
) -> Enemy {
    let tier = zone.tier.max(1);
    let base_gold = (ENEMY_GOLD_BASE + tier * ENEMY_GOLD_PER_TIER) as u64;
    let base_xp =
        (template.base_xp as f64 * (1.0 + ENEMY_XP_PER_LEVEL * (level.saturating_sub(1)) as f64))
            .floor() as u64;

    if is_boss {
        // A boss outclasses one last-wave enemy without reaching the
        // combined weight of a full stage of them.
        let pool_avg_hp = zone
            .enemies
            .iter()
            .filter_map(|id| get_enemy_type(id).ok())
            .map(|pool_type| scaled_hp(pool_type.base_hp, zone.enemy_level) as f64)
            .sum::<f64>()
            / zone.enemies.len().max(1) as f64;
        let hp = (pool_avg_hp * BOSS_HP_STAGE_FACTOR * BOSS_HP_MARGIN).floor() as u32;

        let last_stage = BOSS_STAGE_INDEX - 1;
        let last_wave = ENEMIES_PER_STAGE[last_stage];
        let damage =
            (normal_damage(tier, last_stage, last_wave) as f64 * BOSS_DAMAGE_FACTOR).floor() as u32;

        Enemy {
            name: template.name.to_string(),
            max_hp: hp,
            current_hp: hp,
            damage,
            gold_range: (
                base_gold * BOSS_GOLD_MIN_MULT as u64,
                base_gold * BOSS_GOLD_MAX_MULT as u64,
            ),
            xp_range: (
                base_xp * BOSS_XP_MIN_MULT as u64,
                base_xp * BOSS_XP_MAX_MULT as u64,
            ),
            is_boss: true,
        }
    } else {
        let hp = scaled_hp(template.base_hp, level);
        Enemy {
            name: template.name.to_string(),
            max_hp: hp,
            current_hp: hp,
            damage: normal_damage(tier, stage_index, wave),
            gold_range: (
                base_gold,
                (base_gold as f64 * ENEMY_GOLD_RANGE_SPREAD).floor() as u64,
            ),
            xp_range: (
                base_xp,
                (base_xp as f64 * ENEMY_XP_RANGE_SPREAD).floor() as u64,
            ),
            is_boss: false,
        }
    }
}
