//! Achievement types and derived evaluation.

use crate::core::player_state::PlayerStats;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Clinical cases
    FirstCase,
    CaseSolverI,
    CaseSolverII,
    CaseSolverIII,
    // Quizzes
    QuizTakerI,
    QuizTakerII,
    QuizTakerIII,
    // Correct answers
    SharpDiagnostician,
    MasterDiagnostician,
    // Streaks
    WeekOnCall,
    MonthOnCall,
    // Study time
    Bookworm,
    NightShift,
}

/// Which lifetime counter an achievement tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    CasesCompleted,
    QuizzesTaken,
    TotalCorrectAnswers,
    BestStreak,
    TotalStudyMinutes,
}

impl StatKind {
    /// Reads the tracked counter from the stats block.
    pub fn value(&self, stats: &PlayerStats) -> u64 {
        match self {
            StatKind::CasesCompleted => stats.cases_completed,
            StatKind::QuizzesTaken => stats.quizzes_taken,
            StatKind::TotalCorrectAnswers => stats.total_correct_answers,
            StatKind::BestStreak => stats.best_streak as u64,
            StatKind::TotalStudyMinutes => stats.total_study_minutes,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub stat: StatKind,
    pub threshold: u64,
}

/// Derived progress toward one achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementStatus {
    pub def: &'static AchievementDef,
    /// `min(stat_value, threshold)`.
    pub progress: u64,
    pub unlocked: bool,
}

/// Evaluates every achievement against the current stats.
pub fn evaluate_achievements(stats: &PlayerStats) -> Vec<AchievementStatus> {
    super::data::ALL_ACHIEVEMENTS
        .iter()
        .map(|def| {
            let value = def.stat.value(stats);
            AchievementStatus {
                def,
                progress: value.min(def.threshold),
                unlocked: value >= def.threshold,
            }
        })
        .collect()
}
