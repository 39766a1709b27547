//! Pure progression helpers: leveling, quiz energy cost, accuracy,
//! and the day-continuity streak policy.
//!
//! Everything here is a pure function of its inputs so it can be
//! exercised without a clock or a full `PlayerState`.

use crate::core::constants::{
    HUNGER_COST_MULTIPLIER, HUNGER_PENALTY_THRESHOLD, QUESTIONS_PER_QUIZ, XP_PER_LEVEL,
};
use chrono::NaiveDate;

/// How the current session relates to the player's last played day.
///
/// The engine never reads the wall clock for streaks; the caller
/// compares calendar days and passes the result in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayContinuity {
    /// Already played today; the streak is unchanged.
    SameDay,
    /// Last played yesterday; the streak continues.
    NextDay,
    /// Gap of two or more days, or first session ever.
    Lapsed,
}

impl PlayContinuity {
    /// Derives continuity from calendar days. The clock collaborator
    /// owns timezone handling; `last_played` is `None` on the first
    /// session.
    pub fn from_days(last_played: Option<NaiveDate>, today: NaiveDate) -> Self {
        match last_played {
            None => PlayContinuity::Lapsed,
            Some(last) if last == today => PlayContinuity::SameDay,
            Some(last) if today - last == chrono::Duration::days(1) => PlayContinuity::NextDay,
            Some(_) => PlayContinuity::Lapsed,
        }
    }
}

/// Level as a pure function of total XP. Never stored.
pub fn level_for_xp(xp: u64) -> u32 {
    (xp / XP_PER_LEVEL) as u32 + 1
}

/// XP still needed to reach the next level.
pub fn xp_to_next_level(xp: u64) -> u64 {
    XP_PER_LEVEL - xp % XP_PER_LEVEL
}

/// Effective energy cost of a quiz. Hunger above the penalty
/// threshold doubles the base cost.
pub fn quiz_energy_cost(base_cost: u32, hunger: u32) -> u32 {
    if hunger > HUNGER_PENALTY_THRESHOLD {
        base_cost * HUNGER_COST_MULTIPLIER
    } else {
        base_cost
    }
}

/// Lifetime accuracy rate in `[0.0, 1.0]`.
///
/// Quizzes have a fixed number of questions, so the denominator is
/// `quizzes_taken * QUESTIONS_PER_QUIZ`. Returns 0.0 before the first
/// quiz to avoid dividing by zero.
pub fn accuracy_rate(total_correct_answers: u64, quizzes_taken: u64) -> f64 {
    let total_questions = quizzes_taken * QUESTIONS_PER_QUIZ;
    if total_questions == 0 {
        return 0.0;
    }
    total_correct_answers as f64 / total_questions as f64
}
