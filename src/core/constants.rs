// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u32 = 10;

// Waves per stage, indexed by stage (stage 5 is the boss stage and always
// spawns exactly one enemy). Final quests front-load more enemies.
pub const ENEMIES_PER_STAGE: [u32; 5] = [2, 3, 4, 5, 6];
pub const ENEMIES_PER_STAGE_FINAL: [u32; 5] = [3, 4, 5, 6, 1];
pub const STAGES_PER_QUEST: usize = 5;
pub const BOSS_STAGE_INDEX: usize = 4;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_LEVEL_MULTIPLIER: f64 = 1.5;
pub const STAT_POINTS_PER_LEVEL: u32 = 3;

// Derived stat formulas
pub const BASE_DAMAGE: u32 = 3;
pub const BASE_HP: u32 = 50;
pub const HP_PER_VIT: u32 = 10;
pub const BASE_CRIT_CHANCE_PERCENT: f64 = 2.0;
pub const CRIT_CHANCE_PER_LUK: f64 = 0.8;
pub const CRIT_CHANCE_CAP_PERCENT: f64 = 50.0;
pub const CRIT_MULTIPLIER: f64 = 2.0;
pub const ATTACK_INTERVAL_BASE_MS: u32 = 2000;
pub const ATTACK_INTERVAL_PER_AGI_MS: u32 = 60;
pub const ATTACK_INTERVAL_FLOOR_MS: u32 = 600;
pub const GOLD_BONUS_PER_LUK: f64 = 0.02;

// Formula-mode enemy scaling (zones without explicit stage tables)
pub const BASE_ENEMY_DAMAGE: u32 = 5;
pub const AREA_PROGRESS_MAX: u32 = 8;
pub const AREA_DAMAGE_BONUS: u32 = 1;
pub const ENEMY_HP_PER_LEVEL: f64 = 0.25;
pub const ENEMY_XP_PER_LEVEL: f64 = 0.2;
pub const ENEMY_XP_RANGE_SPREAD: f64 = 1.3;
pub const ENEMY_GOLD_BASE: u32 = 5;
pub const ENEMY_GOLD_PER_TIER: u32 = 3;
pub const ENEMY_GOLD_RANGE_SPREAD: f64 = 1.5;

// Boss scaling. A boss must be strictly harder than any single normal
// wave but weaker than the full stage's worth of enemies: HP sits at
// BOSS_HP_STAGE_FACTOR times the average last-stage wave HP, times a
// margin, and damage at BOSS_DAMAGE_FACTOR times the final wave's.
pub const BOSS_HP_STAGE_FACTOR: f64 = 6.0;
pub const BOSS_HP_MARGIN: f64 = 1.2;
pub const BOSS_DAMAGE_FACTOR: f64 = 1.5;
pub const BOSS_GOLD_MIN_MULT: u32 = 4;
pub const BOSS_GOLD_MAX_MULT: u32 = 6;
pub const BOSS_XP_MIN_MULT: u32 = 4;
pub const BOSS_XP_MAX_MULT: u32 = 5;

// Battle pacing
pub const NEXT_WAVE_DELAY_SECONDS: f64 = 0.5;
pub const DEFEAT_PAUSE_SECONDS: f64 = 1.0;
pub const AUTO_REPLAY_DELAY_SECONDS: f64 = 1.0;
pub const DEFEAT_XP_FRACTION: f64 = 0.5;
pub const COMBAT_SPEED_MIN: u32 = 1;
pub const COMBAT_SPEED_MAX: u32 = 4;

// Forge improvement track
pub const MAX_IMPROVEMENT_LEVEL: u32 = 3;
pub const IMPROVE_COST_PERCENT: f64 = 0.25;
pub const IMPROVE_BONUS_WEAPON: u32 = 2;
pub const IMPROVE_BONUS_ARMOR: u32 = 10;
// Starter gear has no shop cost; improvement pricing falls back to half
// the first tier's cost.
pub const STARTER_IMPROVE_COST_FACTOR: f64 = 0.5;

// Click upgrade cost curve: 20 + (n-1)*15 + (n-1)^1.5 * 5
pub const CLICK_UPGRADE_BASE_COST: f64 = 20.0;
pub const CLICK_UPGRADE_LINEAR_COST: f64 = 15.0;
pub const CLICK_UPGRADE_EXPONENT: f64 = 1.5;
pub const CLICK_UPGRADE_EXP_COST: f64 = 5.0;

// Guild heroes and passive income
pub const HERO_RECRUIT_COST: u64 = 250;
pub const HERO_TRAINING_BASE_COST: f64 = 50.0;
pub const HERO_TRAINING_GROWTH: f64 = 1.5;
pub const PASSIVE_INCOME_BASE: u64 = 5;
pub const PASSIVE_INCOME_PER_LEVEL: u64 = 2;
pub const PASSIVE_INCOME_PERIOD_SECONDS: f64 = 60.0;
