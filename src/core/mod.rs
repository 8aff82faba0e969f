pub mod commands;
pub mod constants;
pub mod game_state;
pub mod tick;
