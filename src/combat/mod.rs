pub mod logic;
pub mod spawner;
pub mod types;
