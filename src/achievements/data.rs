//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, StatKind};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // Clinical cases
    AchievementDef {
        id: AchievementId::FirstCase,
        name: "First Patient",
        description: "Complete your first clinical case",
        stat: StatKind::CasesCompleted,
        threshold: 1,
    },
    AchievementDef {
        id: AchievementId::CaseSolverI,
        name: "Case Solver I",
        description: "Complete 10 clinical cases",
        stat: StatKind::CasesCompleted,
        threshold: 10,
    },
    AchievementDef {
        id: AchievementId::CaseSolverII,
        name: "Case Solver II",
        description: "Complete 50 clinical cases",
        stat: StatKind::CasesCompleted,
        threshold: 50,
    },
    AchievementDef {
        id: AchievementId::CaseSolverIII,
        name: "Case Solver III",
        description: "Complete 200 clinical cases",
        stat: StatKind::CasesCompleted,
        threshold: 200,
    },
    // Quizzes
    AchievementDef {
        id: AchievementId::QuizTakerI,
        name: "Pop Quiz",
        description: "Take 10 quizzes",
        stat: StatKind::QuizzesTaken,
        threshold: 10,
    },
    AchievementDef {
        id: AchievementId::QuizTakerII,
        name: "Exam Season",
        description: "Take 100 quizzes",
        stat: StatKind::QuizzesTaken,
        threshold: 100,
    },
    AchievementDef {
        id: AchievementId::QuizTakerIII,
        name: "Board Review",
        description: "Take 500 quizzes",
        stat: StatKind::QuizzesTaken,
        threshold: 500,
    },
    // Correct answers
    AchievementDef {
        id: AchievementId::SharpDiagnostician,
        name: "Sharp Diagnostician",
        description: "Answer 100 questions correctly",
        stat: StatKind::TotalCorrectAnswers,
        threshold: 100,
    },
    AchievementDef {
        id: AchievementId::MasterDiagnostician,
        name: "Master Diagnostician",
        description: "Answer 1,000 questions correctly",
        stat: StatKind::TotalCorrectAnswers,
        threshold: 1_000,
    },
    // Streaks
    AchievementDef {
        id: AchievementId::WeekOnCall,
        name: "Week On Call",
        description: "Play 7 days in a row",
        stat: StatKind::BestStreak,
        threshold: 7,
    },
    AchievementDef {
        id: AchievementId::MonthOnCall,
        name: "Month On Call",
        description: "Play 30 days in a row",
        stat: StatKind::BestStreak,
        threshold: 30,
    },
    // Study time
    AchievementDef {
        id: AchievementId::Bookworm,
        name: "Bookworm",
        description: "Study for 10 hours total",
        stat: StatKind::TotalStudyMinutes,
        threshold: 600,
    },
    AchievementDef {
        id: AchievementId::NightShift,
        name: "Night Shift",
        description: "Study for 50 hours total",
        stat: StatKind::TotalStudyMinutes,
        threshold: 3_000,
    },
];

/// Looks up a definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_resolvable() {
        for def in ALL_ACHIEVEMENTS {
            assert!(get_achievement_def(def.id).is_some());
        }
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in ALL_ACHIEVEMENTS.iter().enumerate() {
            for b in &ALL_ACHIEVEMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_thresholds_nonzero() {
        assert!(ALL_ACHIEVEMENTS.iter().all(|d| d.threshold > 0));
    }
}
