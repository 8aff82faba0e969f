//! End-to-end battle sessions driven through `game_tick`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use thornmere::combat::logic::{player_attack, retreat, start_battle, BattleEvent};
use thornmere::combat::types::BattlePhase;
use thornmere::core::game_state::GameState;
use thornmere::core::tick::{game_tick, TickEvent, TickResult};

const TICK: f64 = 0.1;

fn battle_events(result: &TickResult) -> Vec<BattleEvent> {
    result
        .events
        .iter()
        .filter_map(|event| match event {
            TickEvent::Battle(battle_event) => Some(battle_event.clone()),
            _ => None,
        })
        .collect()
}

fn run_until_idle(
    state: &mut GameState,
    rng: &mut ChaCha8Rng,
    max_ticks: usize,
) -> Vec<BattleEvent> {
    let mut collected = Vec::new();
    for _ in 0..max_ticks {
        let result = game_tick(state, TICK, rng).unwrap();
        collected.extend(battle_events(&result));
        if state.battle.phase == BattlePhase::Idle {
            return collected;
        }
    }
    panic!("battle did not conclude within {} ticks", max_ticks);
}

fn one_shot_hero(state: &mut GameState) {
    state.hero.stats.strength = 500;
    state.hero.heal_to_full();
}

#[test]
fn clearing_every_wave_completes_the_stage() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    one_shot_hero(&mut state);

    let events = start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    assert!(matches!(events[0], BattleEvent::BattleStarted { .. }));
    assert_eq!(state.battle.total_waves, 2);

    let events = run_until_idle(&mut state, &mut rng, 200);

    let waves_cleared = events
        .iter()
        .filter(|event| matches!(event, BattleEvent::WaveCleared { .. }))
        .count();
    assert_eq!(waves_cleared, 2);

    let stage_cleared = events
        .iter()
        .find(|event| matches!(event, BattleEvent::StageCleared { .. }));
    let Some(BattleEvent::StageCleared {
        gold,
        xp,
        quest_complete,
    }) = stage_cleared
    else {
        panic!("no stage clear event");
    };
    assert!(!quest_complete);
    assert_eq!(state.hero.gold, *gold);
    assert!(*gold > 0);
    assert!(*xp > 0);

    assert_eq!(
        state.quest_stages("millbrook_1"),
        [true, false, false, false, false]
    );
    assert!(!state.battle_snapshot().active);
}

#[test]
fn wave_gap_has_no_target() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(101);
    state.hero.click_damage = 1000;

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    let events = player_attack(&mut state, true, &mut rng);
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::WaveCleared { .. })));

    // The next wave is still half a second out; clicking hits nothing.
    assert!(state.battle.enemy.is_none());
    assert!(player_attack(&mut state, true, &mut rng).is_empty());

    // After the spawn delay the wave appears and clicks land again.
    let mut spawned = false;
    for _ in 0..6 {
        let result = game_tick(&mut state, TICK, &mut rng).unwrap();
        spawned |= battle_events(&result)
            .iter()
            .any(|event| matches!(event, BattleEvent::WaveSpawned { .. }));
    }
    assert!(spawned);
    assert!(!player_attack(&mut state, true, &mut rng).is_empty());
}

#[test]
fn manual_clicks_never_crit() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(102);
    state.hero.stats.luck = 1000; // Crit capped at 50%
    state.hero.click_damage = 2;

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    let mut clicks = 0;
    for _ in 0..200 {
        for event in player_attack(&mut state, true, &mut rng) {
            if let BattleEvent::PlayerAttack {
                damage,
                was_crit,
                manual,
            } = event
            {
                assert!(manual);
                assert!(!was_crit);
                assert_eq!(damage, 2);
                clicks += 1;
            }
        }
        if state.battle.phase == BattlePhase::Idle {
            break;
        }
        game_tick(&mut state, TICK, &mut rng).unwrap();
    }
    assert!(clicks > 10);
}

#[test]
fn hero_defeat_keeps_half_the_xp_and_no_gold() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(103);
    state.hero.click_damage = 1000;

    // Clear one wave for some banked XP, then get killed by the second.
    start_battle(&mut state, "millbrook_10", 0, &mut rng).unwrap();
    player_attack(&mut state, true, &mut rng);
    let banked_xp = state.battle.xp_earned;
    assert!(banked_xp > 0);

    // Zone 10 enemies hit for 50+; stop clicking and let them win.
    let events = run_until_idle(&mut state, &mut rng, 2000);

    let defeat = events
        .iter()
        .find(|event| matches!(event, BattleEvent::HeroDefeated { .. }));
    let Some(BattleEvent::HeroDefeated { xp_kept }) = defeat else {
        panic!("hero was not defeated");
    };
    assert_eq!(*xp_kept, banked_xp / 2);
    assert_eq!(state.hero.xp, banked_xp / 2);
    assert_eq!(state.hero.gold, 0);
    assert_eq!(state.hero.hp, 0);
    assert_eq!(
        state.quest_stages("millbrook_10"),
        [false; 5]
    );
}

#[test]
fn retreat_keeps_all_xp_and_forfeits_gold() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(104);
    state.hero.click_damage = 1000;

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    player_attack(&mut state, true, &mut rng);
    let banked_xp = state.battle.xp_earned;
    let banked_gold = state.battle.gold_earned;
    assert!(banked_xp > 0);
    assert!(banked_gold > 0);

    let events = retreat(&mut state);
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::Retreated { xp_kept } if *xp_kept == banked_xp)));

    assert_eq!(state.hero.xp, banked_xp);
    assert_eq!(state.hero.gold, 0);
    assert_eq!(state.battle.phase, BattlePhase::Idle);
    // The stage was abandoned mid-way, so it stays unmarked.
    assert_eq!(state.quest_stages("millbrook_1"), [false; 5]);

    // Retreat is final: nothing left on the queue fires afterwards.
    for _ in 0..50 {
        let result = game_tick(&mut state, TICK, &mut rng).unwrap();
        assert!(battle_events(&result).is_empty());
    }

    // And retreating again is a no-op.
    assert!(retreat(&mut state).is_empty());
}

#[test]
fn counter_attacks_are_dropped_after_the_wave_ends() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(105);
    one_shot_hero(&mut state);

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    let hp_before = state.hero.hp;

    // One-shot kills mean the enemy never survives a swing, so no
    // counter-attack should ever land.
    let events = run_until_idle(&mut state, &mut rng, 200);
    assert!(events
        .iter()
        .all(|event| !matches!(event, BattleEvent::EnemyAttack { .. })));
    assert_eq!(state.hero.hp, hp_before);
}

#[test]
fn starting_a_battle_heals_to_full() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(106);
    state.hero.hp = 3;

    start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    assert_eq!(state.hero.hp, state.hero.max_hp);
}

#[test]
fn starting_while_active_is_a_no_op() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(107);

    let events = start_battle(&mut state, "millbrook_1", 0, &mut rng).unwrap();
    assert!(!events.is_empty());

    let events = start_battle(&mut state, "millbrook_1", 1, &mut rng).unwrap();
    assert!(events.is_empty());
    assert_eq!(state.battle.stage_index, 0);
}

#[test]
fn unknown_quest_is_a_data_error() {
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(108);
    assert!(start_battle(&mut state, "millbrook_99", 0, &mut rng).is_err());
}
