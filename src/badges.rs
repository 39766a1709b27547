//! Badge ranks derived from player level.
//!
//! Badges are never stored per-player: the current and next badge are
//! recomputed from the level on every read, so a catalog change can
//! never drift out of sync with saved state.

use crate::core::progression::level_for_xp;

/// Static definition of a badge rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Minimum level at which this badge applies.
    pub level_threshold: u32,
    pub description: &'static str,
}

/// All badges, ordered by ascending level threshold. The ordering is
/// relied on by the lookup functions below.
pub const ALL_BADGES: &[BadgeDef] = &[
    BadgeDef {
        id: "calouro",
        name: "Med Student",
        level_threshold: 1,
        description: "First day of medical school",
    },
    BadgeDef {
        id: "interno",
        name: "Intern",
        level_threshold: 5,
        description: "Surviving the hospital rotations",
    },
    BadgeDef {
        id: "residente",
        name: "Resident",
        level_threshold: 10,
        description: "On call and on the ward",
    },
    BadgeDef {
        id: "especialista",
        name: "Specialist",
        level_threshold: 20,
        description: "Board-certified in a specialty",
    },
    BadgeDef {
        id: "preceptor",
        name: "Attending",
        level_threshold: 30,
        description: "Teaching the next generation",
    },
    BadgeDef {
        id: "chefe",
        name: "Chief of Medicine",
        level_threshold: 50,
        description: "Running the whole hospital",
    },
];

/// The highest-threshold badge with `threshold <= level`.
pub fn current_badge(level: u32) -> &'static BadgeDef {
    ALL_BADGES
        .iter()
        .rev()
        .find(|b| b.level_threshold <= level)
        .unwrap_or(&ALL_BADGES[0])
}

/// The lowest-threshold badge with `threshold > level`, or `None` at
/// the top rank.
pub fn next_badge(level: u32) -> Option<&'static BadgeDef> {
    ALL_BADGES.iter().find(|b| b.level_threshold > level)
}

/// Progress from the current badge toward the next one in
/// `[0.0, 1.0]`. 1.0 once the top badge is held.
pub fn badge_progress(xp: u64) -> f64 {
    let level = level_for_xp(xp);
    let current = current_badge(level);
    let next = match next_badge(level) {
        Some(b) => b,
        None => return 1.0,
    };
    let span = (next.level_threshold - current.level_threshold) as f64;
    let into = (level - current.level_threshold) as f64;
    into / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_sorted_by_threshold() {
        for pair in ALL_BADGES.windows(2) {
            assert!(pair[0].level_threshold < pair[1].level_threshold);
        }
        assert_eq!(ALL_BADGES[0].level_threshold, 1);
    }

    #[test]
    fn test_current_badge_resolution() {
        assert_eq!(current_badge(1).id, "calouro");
        assert_eq!(current_badge(4).id, "calouro");
        assert_eq!(current_badge(5).id, "interno");
        assert_eq!(current_badge(25).id, "especialista");
        assert_eq!(current_badge(30).id, "preceptor");
        assert_eq!(current_badge(200).id, "chefe");
    }

    #[test]
    fn test_next_badge_resolution() {
        assert_eq!(next_badge(1).unwrap().id, "interno");
        assert_eq!(next_badge(25).unwrap().id, "preceptor");
        assert_eq!(next_badge(49).unwrap().id, "chefe");
        assert!(next_badge(50).is_none());
    }

    #[test]
    fn test_badge_progress_midway() {
        // Level 25 sits halfway between thresholds 20 and 30
        let xp = 24_000; // level 25
        assert!((badge_progress(xp) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_badge_progress_at_top_rank() {
        let xp = 60_000; // level 61, past the last threshold
        assert_eq!(badge_progress(xp), 1.0);
    }
}
