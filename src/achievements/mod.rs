//! Achievement system module.
//!
//! Achievements are derived entirely from the lifetime stat counters
//! in `PlayerStats`; nothing about them is stored per-player, so a
//! definition change can never leave stale unlock state in a save.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{evaluate_achievements, AchievementDef, AchievementId, AchievementStatus, StatKind};
