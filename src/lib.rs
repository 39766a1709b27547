//! MedQuest - Player Progression & Resource Economy Engine
//!
//! The stateful model behind the medical-training game: energy and
//! hunger decay, XP/leveling, reputation, streaks, badges,
//! achievements, and the shop transaction ledger. Presentation layers
//! consume the read surface and call the mutating operations exposed
//! here; nothing else writes player state.

pub mod achievements;
pub mod badges;
pub mod core;
pub mod professions;
pub mod save_manager;
pub mod shop;

pub use crate::core::constants::*;
pub use crate::core::player_state::{LevelUp, PlayerState, PlayerStats};
pub use crate::core::progression::PlayContinuity;
