//! The battle state machine.
//!
//! Everything here mutates `GameState` and reports what happened as a
//! `Vec<BattleEvent>`; the presentation layer turns events into a combat
//! log. Commands whose guards fail return an empty event list and leave
//! the state untouched.

use rand::Rng;

use crate::combat::spawner::spawn_enemy;
use crate::combat::types::{ActionKind, BattlePhase};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::data::quests::get_quest;
use crate::data::zones::get_zone;
use crate::data::DataError;
use crate::hero::progression::{check_level_up, LevelUpReport};
use crate::items::ingredients::{allowed_tiers_for_zone_tier, roll_drops, IngredientDrop};

#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        zone_name: String,
        stage_index: usize,
        is_boss: bool,
    },
    WaveSpawned {
        wave: u32,
        total_waves: u32,
        enemy_name: String,
    },
    PlayerAttack {
        damage: u32,
        was_crit: bool,
        manual: bool,
    },
    EnemyAttack {
        damage: u32,
        enemy_name: String,
    },
    WaveCleared {
        enemy_name: String,
        gold: u64,
        xp: u64,
        drops: Vec<IngredientDrop>,
    },
    StageCleared {
        gold: u64,
        xp: u64,
        quest_complete: bool,
    },
    HeroDefeated {
        xp_kept: u64,
    },
    Retreated {
        xp_kept: u64,
    },
    LeveledUp {
        new_level: u32,
    },
    BuildingUnlocked {
        building_id: String,
        name: String,
    },
}

fn waves_for_stage(stage_index: usize, is_final_quest: bool) -> u32 {
    if stage_index == BOSS_STAGE_INDEX {
        1
    } else if is_final_quest {
        ENEMIES_PER_STAGE_FINAL[stage_index]
    } else {
        ENEMIES_PER_STAGE[stage_index]
    }
}

fn push_level_events(report: &LevelUpReport, events: &mut Vec<BattleEvent>) {
    if report.leveled() {
        events.push(BattleEvent::LeveledUp {
            new_level: report.new_level,
        });
    }
    for building in &report.unlocked_buildings {
        events.push(BattleEvent::BuildingUnlocked {
            building_id: building.id.to_string(),
            name: building.name.to_string(),
        });
    }
}

/// Enters a quest stage: full heal, wave 1 of M, first enemy spawned.
/// No-op (empty event list) if a battle is already running or the stage
/// index is out of range.
pub fn start_battle(
    state: &mut GameState,
    quest_id: &str,
    stage_index: usize,
    rng: &mut impl Rng,
) -> Result<Vec<BattleEvent>, DataError> {
    if state.battle.phase != BattlePhase::Idle || stage_index >= STAGES_PER_QUEST {
        return Ok(Vec::new());
    }

    let quest = get_quest(quest_id)?;
    let zone = get_zone(quest.zone_id)?;
    let is_boss = stage_index == BOSS_STAGE_INDEX;
    let total_waves = waves_for_stage(stage_index, quest.is_final);

    state.hero.heal_to_full();

    let battle = &mut state.battle;
    battle.reset();
    battle.phase = BattlePhase::Active;
    battle.quest = Some(quest);
    battle.zone = Some(zone);
    battle.stage_index = stage_index;
    battle.current_wave = 1;
    battle.total_waves = total_waves;

    let enemy = spawn_enemy(zone, stage_index, 1, is_boss, rng)?;
    let events = vec![
        BattleEvent::BattleStarted {
            zone_name: zone.name.to_string(),
            stage_index,
            is_boss,
        },
        BattleEvent::WaveSpawned {
            wave: 1,
            total_waves,
            enemy_name: enemy.name.clone(),
        },
    ];
    battle.enemy = Some(enemy);
    Ok(events)
}

/// One hero attack. Manual clicks deal flat click damage and never
/// crit; automatic swings use derived damage with an independent crit
/// roll that doubles it.
pub fn player_attack(state: &mut GameState, manual: bool, rng: &mut impl Rng) -> Vec<BattleEvent> {
    if !state.battle.is_active() || !state.battle.enemy_alive() {
        return Vec::new();
    }

    let derived = state.hero.derived();
    let (damage, was_crit) = if manual {
        (state.hero.click_damage, false)
    } else {
        let roll = rng.gen::<f64>() * 100.0;
        if roll < derived.crit_chance_percent {
            ((derived.damage as f64 * CRIT_MULTIPLIER).floor() as u32, true)
        } else {
            (derived.damage, false)
        }
    };

    let mut events = vec![BattleEvent::PlayerAttack {
        damage,
        was_crit,
        manual,
    }];

    let defeated = {
        let battle = &mut state.battle;
        match battle.enemy.as_mut() {
            Some(enemy) => {
                enemy.take_damage(damage);
                !enemy.is_alive()
            }
            None => false,
        }
    };

    if defeated {
        on_enemy_defeated(state, rng, &mut events);
    }
    events
}

/// One enemy attack against the hero. Guarded the same way as player
/// attacks so a stale counter-attack after the wave ended does nothing.
pub fn enemy_attack(state: &mut GameState) -> Vec<BattleEvent> {
    if !state.battle.is_active() || !state.battle.enemy_alive() {
        return Vec::new();
    }

    let (damage, enemy_name) = match &state.battle.enemy {
        Some(enemy) => (enemy.damage, enemy.name.clone()),
        None => return Vec::new(),
    };

    state.hero.take_damage(damage);
    let mut events = vec![BattleEvent::EnemyAttack { damage, enemy_name }];

    if !state.hero.is_alive() {
        on_hero_defeated(state, &mut events);
    }
    events
}

/// Abandons the battle. Earned XP is kept in full; gold is forfeited.
pub fn retreat(state: &mut GameState) -> Vec<BattleEvent> {
    if !state.battle.is_active() {
        return Vec::new();
    }

    let xp_kept = state.battle.xp_earned;
    state.hero.xp += xp_kept;
    state.battle.reset();

    let mut events = vec![BattleEvent::Retreated { xp_kept }];
    let report = check_level_up(&mut state.hero, &mut state.unlocked_buildings);
    push_level_events(&report, &mut events);
    events
}

fn on_enemy_defeated(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<BattleEvent>) {
    let derived = state.hero.derived();

    let (enemy_name, gold_range, xp_range) = match &state.battle.enemy {
        Some(enemy) => (enemy.name.clone(), enemy.gold_range, enemy.xp_range),
        None => return,
    };
    let zone_tier = match state.battle.zone {
        Some(zone) => zone.tier,
        None => return,
    };

    let gold_base = rng.gen_range(gold_range.0..=gold_range.1);
    let gold = (gold_base as f64 * derived.gold_bonus).floor() as u64;
    let xp = rng.gen_range(xp_range.0..=xp_range.1);
    let drops = roll_drops(allowed_tiers_for_zone_tier(zone_tier), rng);

    // Ingredients land in the inventory immediately; gold and XP are
    // paid out at stage end (or partially, on defeat).
    for drop in &drops {
        state.add_ingredient(drop);
    }

    let battle = &mut state.battle;
    battle.gold_earned += gold;
    battle.xp_earned += xp;
    battle.ingredients_earned.extend(drops.iter().cloned());

    events.push(BattleEvent::WaveCleared {
        enemy_name,
        gold,
        xp,
        drops,
    });

    if battle.current_wave < battle.total_waves {
        battle.current_wave += 1;
        battle.enemy = None;
        battle.schedule(NEXT_WAVE_DELAY_SECONDS, ActionKind::SpawnNextWave);
    } else {
        on_stage_complete(state, events);
    }
}

fn on_stage_complete(state: &mut GameState, events: &mut Vec<BattleEvent>) {
    let (quest, stage_index, gold, xp) = {
        let battle = &state.battle;
        let quest = match battle.quest {
            Some(quest) => quest,
            None => return,
        };
        (quest, battle.stage_index, battle.gold_earned, battle.xp_earned)
    };

    state.mark_stage_complete(quest.id, stage_index);
    state.hero.gold += gold;
    state.hero.xp += xp;

    let quest_complete = state.quest_stages(quest.id).iter().all(|done| *done);
    if quest_complete
        && !state.completed_quests.iter().any(|id| id == quest.id)
        && !state.pending_rewards.iter().any(|id| id == quest.id)
    {
        state.pending_rewards.push(quest.id.to_string());
    }

    events.push(BattleEvent::StageCleared {
        gold,
        xp,
        quest_complete,
    });

    let report = check_level_up(&mut state.hero, &mut state.unlocked_buildings);
    push_level_events(&report, events);

    let replay = state.auto_replay && state.first_incomplete_stage(quest.id).is_some();
    let battle = &mut state.battle;
    if replay {
        // Keep the session alive just long enough for the replay beat.
        battle.phase = BattlePhase::Ending;
        battle.enemy = None;
        battle.schedule(AUTO_REPLAY_DELAY_SECONDS, ActionKind::AutoReplay);
    } else {
        battle.reset();
    }
}

fn on_hero_defeated(state: &mut GameState, events: &mut Vec<BattleEvent>) {
    let xp_kept = (state.battle.xp_earned as f64 * DEFEAT_XP_FRACTION).floor() as u64;
    state.hero.xp += xp_kept;

    events.push(BattleEvent::HeroDefeated { xp_kept });
    let report = check_level_up(&mut state.hero, &mut state.unlocked_buildings);
    push_level_events(&report, events);

    let battle = &mut state.battle;
    battle.phase = BattlePhase::Ending;
    battle.enemy = None;
    battle.schedule(DEFEAT_PAUSE_SECONDS, ActionKind::ConcludeDefeat);
}

/// Advances the battle clock by `delta_seconds`: fires due scheduled
/// actions (re-validating each against the current state), then runs the
/// auto-attack cadence. At most one automatic swing resolves per call.
pub fn update_battle(
    state: &mut GameState,
    delta_seconds: f64,
    rng: &mut impl Rng,
) -> Result<Vec<BattleEvent>, DataError> {
    if state.battle.phase == BattlePhase::Idle {
        return Ok(Vec::new());
    }

    state.battle.clock += delta_seconds;
    let mut events = Vec::new();

    for kind in state.battle.take_due_actions() {
        match kind {
            ActionKind::EnemyCounterAttack => {
                events.extend(enemy_attack(state));
            }
            ActionKind::SpawnNextWave => {
                if state.battle.is_active() {
                    let (zone, stage_index, wave, total_waves) = {
                        let battle = &state.battle;
                        match battle.zone {
                            Some(zone) => {
                                (zone, battle.stage_index, battle.current_wave, battle.total_waves)
                            }
                            None => continue,
                        }
                    };
                    let is_boss = stage_index == BOSS_STAGE_INDEX;
                    let enemy = spawn_enemy(zone, stage_index, wave, is_boss, rng)?;
                    events.push(BattleEvent::WaveSpawned {
                        wave,
                        total_waves,
                        enemy_name: enemy.name.clone(),
                    });
                    state.battle.enemy = Some(enemy);
                }
            }
            ActionKind::ConcludeDefeat => {
                if state.battle.phase == BattlePhase::Ending {
                    state.battle.reset();
                }
            }
            ActionKind::AutoReplay => {
                let quest_id = state.battle.quest.map(|quest| quest.id);
                if let Some(quest_id) = quest_id {
                    state.battle.reset();
                    if state.auto_replay {
                        if let Some(stage_index) = state.first_incomplete_stage(quest_id) {
                            events.extend(start_battle(state, quest_id, stage_index, rng)?);
                        }
                    }
                } else {
                    state.battle.reset();
                }
            }
        }
    }

    if state.battle.is_active() && state.battle.enemy_alive() {
        state.battle.attack_timer += delta_seconds;
        let derived = state.hero.derived();
        let adjusted_interval =
            derived.attack_interval_seconds() / state.combat_speed.max(COMBAT_SPEED_MIN) as f64;

        if state.battle.attack_timer >= adjusted_interval {
            state.battle.attack_timer = 0.0;
            events.extend(player_attack(state, false, rng));

            // The survivor hits back half an interval later.
            if state.battle.is_active() && state.battle.enemy_alive() {
                state
                    .battle
                    .schedule(adjusted_interval / 2.0, ActionKind::EnemyCounterAttack);
            }
        }
    }

    Ok(events)
}
