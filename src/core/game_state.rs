//! The root game state aggregate.
//!
//! Owns everything: the hero, quest progress, the ingredient inventory,
//! guild buildings and heroes, and the transient battle session. The
//! presentation layer never touches fields directly for display; it
//! reads the snapshot types at the bottom of this file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::combat::types::{Battle, Enemy};
use crate::core::constants::{COMBAT_SPEED_MIN, STAGES_PER_QUEST};
use crate::data::quests::QuestDef;
use crate::hero::stats::{DerivedStats, Stats};
use crate::hero::Hero;
use crate::items::ingredients::IngredientDrop;

/// A hired guild member. Commissioned heroes generate passive income.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildHero {
    pub id: u32,
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub hero: Hero,
    /// Per-quest stage completion flags. Monotonic; stages never revert.
    pub quest_progress: BTreeMap<String, [bool; STAGES_PER_QUEST]>,
    /// Quests whose board reward has been collected.
    pub completed_quests: Vec<String>,
    /// Quests fully cleared but not yet collected. Set semantics.
    pub pending_rewards: Vec<String>,
    pub city_reputation: BTreeMap<String, u64>,
    /// Ingredient counts keyed by `tier_kind`, e.g. `common_essence`.
    /// Increment-only.
    pub ingredients: BTreeMap<String, u64>,
    pub unlocked_buildings: Vec<String>,
    pub built_buildings: Vec<String>,
    pub guild_heroes: Vec<GuildHero>,
    pub next_hero_id: u32,
    /// City id -> commissioned guild hero id.
    pub commissioned_heroes: BTreeMap<String, u32>,
    pub combat_speed: u32,
    pub auto_replay: bool,
    /// Seconds accumulated toward the next passive income payout.
    pub income_accumulator_seconds: f64,
    #[serde(skip)]
    pub battle: Battle,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            hero: Hero::new(),
            quest_progress: BTreeMap::new(),
            completed_quests: Vec::new(),
            pending_rewards: Vec::new(),
            city_reputation: BTreeMap::new(),
            ingredients: BTreeMap::new(),
            unlocked_buildings: Vec::new(),
            built_buildings: Vec::new(),
            guild_heroes: Vec::new(),
            next_hero_id: 1,
            commissioned_heroes: BTreeMap::new(),
            combat_speed: COMBAT_SPEED_MIN,
            auto_replay: false,
            income_accumulator_seconds: 0.0,
            battle: Battle::default(),
        }
    }

    pub fn quest_stages(&self, quest_id: &str) -> [bool; STAGES_PER_QUEST] {
        self.quest_progress
            .get(quest_id)
            .copied()
            .unwrap_or([false; STAGES_PER_QUEST])
    }

    pub fn mark_stage_complete(&mut self, quest_id: &str, stage_index: usize) {
        if stage_index >= STAGES_PER_QUEST {
            return;
        }
        let stages = self
            .quest_progress
            .entry(quest_id.to_string())
            .or_insert([false; STAGES_PER_QUEST]);
        stages[stage_index] = true;
    }

    pub fn first_incomplete_stage(&self, quest_id: &str) -> Option<usize> {
        self.quest_stages(quest_id)
            .iter()
            .position(|done| !*done)
    }

    /// A quest appears on the board once all its prerequisites have had
    /// their rewards collected.
    pub fn is_quest_unlocked(&self, quest: &QuestDef) -> bool {
        quest
            .unlock_conditions
            .iter()
            .all(|required| self.completed_quests.iter().any(|id| id == required))
    }

    pub fn add_ingredient(&mut self, drop: &IngredientDrop) {
        *self.ingredients.entry(drop.key()).or_insert(0) += 1;
    }

    pub fn is_building_unlocked(&self, building_id: &str) -> bool {
        self.unlocked_buildings.iter().any(|id| id == building_id)
    }

    pub fn has_building(&self, building_id: &str) -> bool {
        self.built_buildings.iter().any(|id| id == building_id)
    }

    pub fn hero_snapshot(&self) -> HeroSnapshot {
        let hero = &self.hero;
        HeroSnapshot {
            level: hero.level,
            xp: hero.xp,
            xp_to_level: hero.xp_to_level,
            gold: hero.gold,
            hp: hero.hp,
            max_hp: hero.max_hp,
            stats: hero.stats,
            stat_points: hero.stat_points,
            click_damage: hero.click_damage,
            derived: hero.derived(),
        }
    }

    pub fn battle_snapshot(&self) -> BattleSnapshot {
        let battle = &self.battle;
        BattleSnapshot {
            active: battle.is_active(),
            quest_id: battle.quest.map(|quest| quest.id.to_string()),
            zone_name: battle.zone.map(|zone| zone.name.to_string()),
            stage_index: battle.stage_index,
            current_wave: battle.current_wave,
            total_waves: battle.total_waves,
            enemy: battle.enemy.clone(),
            gold_earned: battle.gold_earned,
            xp_earned: battle.xp_earned,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the hero for display.
#[derive(Debug, Clone, Serialize)]
pub struct HeroSnapshot {
    pub level: u32,
    pub xp: u64,
    pub xp_to_level: u64,
    pub gold: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub stats: Stats,
    pub stat_points: u32,
    pub click_damage: u32,
    pub derived: DerivedStats,
}

/// Read-only view of the running battle for display.
#[derive(Debug, Clone, Serialize)]
pub struct BattleSnapshot {
    pub active: bool,
    pub quest_id: Option<String>,
    pub zone_name: Option<String>,
    pub stage_index: usize,
    pub current_wave: u32,
    pub total_waves: u32,
    pub enemy: Option<Enemy>,
    pub gold_earned: u64,
    pub xp_earned: u64,
}
