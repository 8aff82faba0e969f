//! Leveling, building unlocks, and the auto-replay loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use thornmere::combat::logic::start_battle;
use thornmere::combat::types::BattlePhase;
use thornmere::core::commands::{build_building, set_auto_replay};
use thornmere::core::constants::STAGES_PER_QUEST;
use thornmere::core::game_state::GameState;
use thornmere::core::tick::game_tick;
use thornmere::hero::progression::check_level_up;

const TICK: f64 = 0.1;

#[test]
fn banked_xp_converts_into_multiple_levels() {
    let mut state = GameState::new();
    state.hero.xp = 250;

    let report = check_level_up(&mut state.hero, &mut state.unlocked_buildings);

    // 100 then 150, landing exactly on level 3 with nothing left over.
    assert_eq!(report.levels_gained, 2);
    assert_eq!(state.hero.level, 3);
    assert_eq!(state.hero.xp, 0);
    assert_eq!(state.hero.stat_points, 6);
    assert_eq!(state.hero.hp, state.hero.max_hp);
}

#[test]
fn leveling_unlocks_buildings_which_can_then_be_built() {
    let mut state = GameState::new();
    state.hero.xp = 250;
    state.hero.gold = 60;

    check_level_up(&mut state.hero, &mut state.unlocked_buildings);

    // Level 3 has crossed the Forge threshold but nothing higher.
    assert!(state.is_building_unlocked("forge"));
    assert!(!state.is_building_unlocked("alchemy_lab"));

    assert!(build_building(&mut state, "forge").unwrap());
    assert!(state.has_building("forge"));
    assert_eq!(state.hero.gold, 10);
}

#[test]
fn auto_replay_walks_through_the_whole_quest() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(300);
    state.hero.stats.strength = 2000;
    state.hero.stats.agility = 100;
    state.hero.heal_to_full();
    state.combat_speed = 4;
    set_auto_replay(&mut state, true);

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();

    // The replay beat restarts the battle at the next unfinished stage
    // until the quest is done, then lets the session die out.
    for _ in 0..4000 {
        game_tick(&mut state, TICK, &mut rng).unwrap();
        if state.quest_stages("millbrook_1") == [true; STAGES_PER_QUEST]
            && state.battle.phase == BattlePhase::Idle
        {
            break;
        }
    }

    assert_eq!(state.quest_stages("millbrook_1"), [true; STAGES_PER_QUEST]);
    assert_eq!(state.battle.phase, BattlePhase::Idle);
    assert_eq!(
        state
            .pending_rewards
            .iter()
            .filter(|id| *id == "millbrook_1")
            .count(),
        1
    );
}

#[test]
fn disabling_auto_replay_cancels_the_scheduled_restart() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(301);
    state.hero.stats.strength = 2000;
    state.hero.stats.agility = 100;
    state.hero.heal_to_full();
    set_auto_replay(&mut state, true);

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();

    // Run until the first stage clears; the replay beat is now queued.
    for _ in 0..2000 {
        game_tick(&mut state, TICK, &mut rng).unwrap();
        if state.quest_stages("millbrook_1")[0] {
            break;
        }
    }
    assert_eq!(state.battle.phase, BattlePhase::Ending);

    // Turning the flag off before the beat fires must stop the restart.
    set_auto_replay(&mut state, false);
    for _ in 0..30 {
        game_tick(&mut state, TICK, &mut rng).unwrap();
    }
    assert_eq!(state.battle.phase, BattlePhase::Idle);
    assert_eq!(state.quest_stages("millbrook_1")[1], false);
}
