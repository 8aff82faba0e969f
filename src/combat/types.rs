use serde::{Deserialize, Serialize};

use crate::data::quests::QuestDef;
use crate::data::zones::ZoneDef;
use crate::items::ingredients::IngredientDrop;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub damage: u32,
    pub gold_range: (u64, u64),
    pub xp_range: (u64, u64),
    pub is_boss: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BattlePhase {
    /// No battle running.
    #[default]
    Idle,
    /// Waves in progress; attacks and scheduling apply.
    Active,
    /// Hero defeated; only the conclude beat remains on the queue.
    Ending,
}

/// Follow-up work queued against the battle clock. Every entry is
/// re-validated when it fires, since the battle may have ended or the
/// target died in the meantime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionKind {
    EnemyCounterAttack,
    SpawnNextWave,
    ConcludeDefeat,
    AutoReplay,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledAction {
    pub due_at: f64,
    pub kind: ActionKind,
}

/// A battle session: one quest stage, fought wave by wave. Transient;
/// reset to idle when the stage ends however it ends.
#[derive(Debug, Clone, Default)]
pub struct Battle {
    pub phase: BattlePhase,
    pub quest: Option<&'static QuestDef>,
    pub zone: Option<&'static ZoneDef>,
    pub stage_index: usize,
    pub current_wave: u32,
    pub total_waves: u32,
    pub enemy: Option<Enemy>,
    pub gold_earned: u64,
    pub xp_earned: u64,
    pub ingredients_earned: Vec<IngredientDrop>,
    /// Seconds elapsed since the battle started.
    pub clock: f64,
    /// Seconds accumulated toward the next auto attack.
    pub attack_timer: f64,
    pub pending: Vec<ScheduledAction>,
}

impl Battle {
    pub fn is_active(&self) -> bool {
        self.phase == BattlePhase::Active
    }

    pub fn enemy_alive(&self) -> bool {
        self.enemy.as_ref().is_some_and(|enemy| enemy.is_alive())
    }

    pub fn schedule(&mut self, delay_seconds: f64, kind: ActionKind) {
        self.pending.push(ScheduledAction {
            due_at: self.clock + delay_seconds,
            kind,
        });
    }

    /// Removes and returns every pending action whose due time has
    /// passed, in due order.
    pub fn take_due_actions(&mut self) -> Vec<ActionKind> {
        self.pending
            .sort_by(|a, b| a.due_at.total_cmp(&b.due_at));
        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for action in self.pending.drain(..) {
            if action.due_at <= self.clock {
                due.push(action.kind);
            } else {
                remaining.push(action);
            }
        }
        self.pending = remaining;
        due
    }

    pub fn reset(&mut self) {
        *self = Battle::default();
    }
}
