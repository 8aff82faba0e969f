//! Immutable reference data: zones, enemy types, quests, cities, shop
//! ladders, guild buildings, and hero name pools.
//!
//! Everything here is static tables plus lookup functions. Lookups fail
//! only on unknown ids, which means corrupted input rather than a game
//! rule, so they get a real error type instead of a silent no-op.

pub mod buildings;
pub mod names;
pub mod quests;
pub mod shop;
pub mod zones;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("unknown zone id: {0}")]
    UnknownZone(String),
    #[error("unknown quest id: {0}")]
    UnknownQuest(String),
    #[error("unknown city id: {0}")]
    UnknownCity(String),
    #[error("unknown enemy type id: {0}")]
    UnknownEnemyType(String),
    #[error("unknown building id: {0}")]
    UnknownBuilding(String),
}
