//! Per-tick orchestration.
//!
//! The host calls `game_tick` on a fixed cadence (`TICK_INTERVAL_MS`,
//! 100 ms) with the elapsed seconds and an RNG. The tick advances the
//! battle and the passive income clock and reports everything that
//! happened as events.

use rand::Rng;

use crate::combat::logic::{update_battle, BattleEvent};
use crate::core::commands::passive_income_per_minute;
use crate::core::constants::PASSIVE_INCOME_PERIOD_SECONDS;
use crate::core::game_state::GameState;
use crate::data::DataError;

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    Battle(BattleEvent),
    PassiveIncome { gold: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

pub fn game_tick(
    state: &mut GameState,
    delta_seconds: f64,
    rng: &mut impl Rng,
) -> Result<TickResult, DataError> {
    let mut events = Vec::new();

    for event in update_battle(state, delta_seconds, rng)? {
        events.push(TickEvent::Battle(event));
    }

    state.income_accumulator_seconds += delta_seconds;
    while state.income_accumulator_seconds >= PASSIVE_INCOME_PERIOD_SECONDS {
        state.income_accumulator_seconds -= PASSIVE_INCOME_PERIOD_SECONDS;
        let gold = passive_income_per_minute(state);
        if gold > 0 {
            state.hero.gold += gold;
            events.push(TickEvent::PassiveIncome { gold });
        }
    }

    Ok(TickResult { events })
}
