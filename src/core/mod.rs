//! Core player state and progression logic.

pub mod constants;
pub mod player_state;
pub mod progression;

pub use constants::*;
pub use player_state::*;
pub use progression::*;
