//! Thornmere - Incremental RPG Combat & Progression Core
//!
//! The rules engine behind a guild-building idle RPG: a hero fights
//! scripted waves of enemies across quest stages, earns gold, XP, and
//! crafting ingredients, levels up, and spends resources on equipment
//! and guild buildings.
//!
//! The crate owns all game state and exposes discrete commands plus a
//! per-tick update; a presentation layer reads snapshots and maps the
//! returned event streams to whatever log or display it wants. No
//! rendering, input handling, or persistence lives here.

pub mod combat;
pub mod core;
pub mod data;
pub mod hero;
pub mod items;
