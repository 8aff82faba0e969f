//! Player commands outside of combat.
//!
//! Every command is guard-then-apply: if the guard fails the state is
//! untouched and the command reports `false`. Only unknown reference
//! data ids surface as errors.

use rand::Rng;

use crate::core::constants::*;
use crate::core::game_state::{GameState, GuildHero};
use crate::data::buildings::get_building;
use crate::data::names::random_hero_name;
use crate::data::quests::{get_city, get_quest};
use crate::data::shop::shop_ladder;
use crate::data::DataError;
use crate::hero::equipment::{EquipmentSlot, EquippedItem};
use crate::hero::stats::StatKind;

/// Spends one stat point. Raising VIT rescales current HP to keep the
/// same fraction of the new maximum.
pub fn allocate_stat(state: &mut GameState, kind: StatKind) -> bool {
    if state.hero.stat_points == 0 {
        return false;
    }

    state.hero.stats.increment(kind);
    state.hero.stat_points -= 1;

    if kind == StatKind::Vitality {
        let new_max_hp = state.hero.derived().max_hp;
        state.hero.rescale_hp(new_max_hp);
    }
    true
}

pub fn set_combat_speed(state: &mut GameState, speed: u32) -> bool {
    if !(COMBAT_SPEED_MIN..=COMBAT_SPEED_MAX).contains(&speed) {
        return false;
    }
    state.combat_speed = speed;
    true
}

pub fn set_auto_replay(state: &mut GameState, enabled: bool) {
    state.auto_replay = enabled;
}

/// Cost of the next click damage point: 20 + (n-1)*15 + (n-1)^1.5 * 5.
pub fn click_upgrade_cost(state: &GameState) -> u64 {
    let n = state.hero.click_damage as f64;
    (CLICK_UPGRADE_BASE_COST
        + (n - 1.0) * CLICK_UPGRADE_LINEAR_COST
        + (n - 1.0).powf(CLICK_UPGRADE_EXPONENT) * CLICK_UPGRADE_EXP_COST)
        .floor() as u64
}

pub fn buy_click_upgrade(state: &mut GameState) -> bool {
    let cost = click_upgrade_cost(state);
    if state.hero.gold < cost {
        return false;
    }
    state.hero.gold -= cost;
    state.hero.click_damage += 1;
    true
}

fn advance_equipment_tier(state: &mut GameState, slot: EquipmentSlot, via_forge: bool) -> bool {
    if via_forge && !state.has_building("forge") {
        return false;
    }

    let tier = state.hero.equipment.tier(slot);
    let ladder = shop_ladder(slot);
    if tier >= ladder.len() {
        return false;
    }

    let item = &ladder[tier];
    if state.hero.gold < item.cost {
        return false;
    }

    state.hero.gold -= item.cost;
    state.hero.equipment.set_tier(slot, tier + 1);
    state.hero.equipment.set_improvement(slot, 0);
    state.hero.equipment.set(
        slot,
        Some(EquippedItem {
            name: item.name.to_string(),
            stat: item.stat,
            value: item.value,
        }),
    );

    if slot == EquipmentSlot::Armor {
        let new_max_hp = state.hero.derived().max_hp;
        state.hero.raise_hp(new_max_hp, item.value);
    }
    true
}

/// Buys the next tier on a slot's shop ladder. Resets the slot's
/// improvement level.
pub fn buy_equipment(state: &mut GameState, slot: EquipmentSlot) -> bool {
    advance_equipment_tier(state, slot, false)
}

/// Forge-crafted version of the same tier advance. Requires the Forge.
pub fn craft_equipment(state: &mut GameState, slot: EquipmentSlot) -> bool {
    advance_equipment_tier(state, slot, true)
}

/// Cost of the next improvement level: 25% of the current tier's shop
/// cost, times (level + 1). Starter gear prices off half the first tier.
pub fn improve_cost(state: &GameState, slot: EquipmentSlot) -> u64 {
    let tier = state.hero.equipment.tier(slot);
    let ladder = shop_ladder(slot);
    let base_cost = if tier == 0 {
        ladder[0].cost as f64 * STARTER_IMPROVE_COST_FACTOR
    } else {
        ladder[tier - 1].cost as f64
    };
    let level = state.hero.equipment.improvement(slot);
    (base_cost * IMPROVE_COST_PERCENT * (level + 1) as f64).floor() as u64
}

pub fn improve_equipment(state: &mut GameState, slot: EquipmentSlot) -> bool {
    if slot == EquipmentSlot::Accessory || !state.has_building("forge") {
        return false;
    }

    let level = state.hero.equipment.improvement(slot);
    if level >= MAX_IMPROVEMENT_LEVEL {
        return false;
    }

    let cost = improve_cost(state, slot);
    if state.hero.gold < cost {
        return false;
    }

    state.hero.gold -= cost;
    state.hero.equipment.set_improvement(slot, level + 1);

    if slot == EquipmentSlot::Armor {
        let new_max_hp = state.hero.derived().max_hp;
        state.hero.raise_hp(new_max_hp, IMPROVE_BONUS_ARMOR);
    }
    true
}

/// Collects a cleared quest from the job board: gold plus city
/// reputation, and the quest moves to the completed list.
pub fn collect_quest_reward(state: &mut GameState, quest_id: &str) -> Result<bool, DataError> {
    let quest = get_quest(quest_id)?;

    let Some(index) = state.pending_rewards.iter().position(|id| id == quest_id) else {
        return Ok(false);
    };
    state.pending_rewards.remove(index);

    state.hero.gold += quest.gold_reward;
    *state
        .city_reputation
        .entry(quest.city_id.to_string())
        .or_insert(0) += quest.reputation_reward;

    if !state.completed_quests.iter().any(|id| id == quest_id) {
        state.completed_quests.push(quest_id.to_string());
    }
    Ok(true)
}

pub fn build_building(state: &mut GameState, building_id: &str) -> Result<bool, DataError> {
    let building = get_building(building_id)?;

    if !state.is_building_unlocked(building_id)
        || state.has_building(building_id)
        || state.hero.gold < building.cost
    {
        return Ok(false);
    }

    state.hero.gold -= building.cost;
    state.built_buildings.push(building_id.to_string());
    Ok(true)
}

/// Hires a level 1 guild hero with a generated name. Requires a built
/// Recruitment Center.
pub fn recruit_hero(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if !state.has_building("recruitment_center") || state.hero.gold < HERO_RECRUIT_COST {
        return false;
    }

    state.hero.gold -= HERO_RECRUIT_COST;
    let hero = GuildHero {
        id: state.next_hero_id,
        name: random_hero_name(rng),
        level: 1,
    };
    state.next_hero_id += 1;
    state.guild_heroes.push(hero);
    true
}

pub fn hero_training_cost(level: u32) -> u64 {
    (HERO_TRAINING_BASE_COST * HERO_TRAINING_GROWTH.powi(level as i32 - 1)).floor() as u64
}

pub fn train_hero(state: &mut GameState, hero_id: u32) -> bool {
    let Some(index) = state
        .guild_heroes
        .iter()
        .position(|hero| hero.id == hero_id)
    else {
        return false;
    };

    let cost = hero_training_cost(state.guild_heroes[index].level);
    if state.hero.gold < cost {
        return false;
    }

    state.hero.gold -= cost;
    state.guild_heroes[index].level += 1;
    true
}

/// Stations a guild hero in a city. The city must be at full reputation
/// with no hero already stationed, and the hero free.
pub fn commission_hero(
    state: &mut GameState,
    city_id: &str,
    hero_id: u32,
) -> Result<bool, DataError> {
    let city = get_city(city_id)?;

    let reputation = state.city_reputation.get(city_id).copied().unwrap_or(0);
    if reputation < city.max_reputation
        || state.commissioned_heroes.contains_key(city_id)
        || !state.guild_heroes.iter().any(|hero| hero.id == hero_id)
        || state.commissioned_heroes.values().any(|id| *id == hero_id)
    {
        return Ok(false);
    }

    state
        .commissioned_heroes
        .insert(city_id.to_string(), hero_id);
    Ok(true)
}

/// Gold per minute from commissioned heroes: 5 + 2 per hero level.
pub fn passive_income_per_minute(state: &GameState) -> u64 {
    state
        .commissioned_heroes
        .values()
        .filter_map(|hero_id| {
            state
                .guild_heroes
                .iter()
                .find(|hero| hero.id == *hero_id)
        })
        .map(|hero| PASSIVE_INCOME_BASE + PASSIVE_INCOME_PER_LEVEL * hero.level as u64)
        .sum()
}
