use crate::core::constants::{
    ENERGY_MAX, HUNGER_INTERVAL_MINUTES, HUNGER_MAX, HUNGER_PER_INTERVAL, MIN_ENERGY_TO_PLAY,
    REPUTATION_MAX, REST_COOLDOWN_SECONDS, REST_ENERGY_RESTORE,
};
use crate::core::progression::{accuracy_rate, level_for_xp, PlayContinuity};
use crate::professions::DEFAULT_PROFESSION_ID;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lifetime statistic counters. All monotone except `best_streak`,
/// which is a running maximum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub cases_completed: u64,
    pub quizzes_taken: u64,
    pub total_correct_answers: u64,
    pub best_streak: u32,
    pub total_study_minutes: u64,
}

/// Result of an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub leveled_up: bool,
}

/// All durable player state. Every field write goes through the
/// methods below; presentation layers only read.
///
/// Each mutating method validates its guard and applies the change in
/// one synchronous step, so a rapid double-trigger from the UI cannot
/// pass the same guard twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: String,
    pub energy: u32,
    pub hunger: u32,
    pub coins: u64,
    pub xp: u64,
    pub streak: u32,
    pub reputation: u32,
    pub stats: PlayerStats,
    /// Durable shop items only; food never lands here.
    pub owned_items: HashSet<String>,
    /// Insertion-ordered, append-only. Last entry is the current
    /// specialty.
    pub unlocked_professions: Vec<String>,
    pub last_rest_at: Option<i64>,
    pub created_at: i64,
}

impl PlayerState {
    /// Creates a fresh account with full energy and the default
    /// profession unlocked.
    pub fn new(current_time: i64) -> Self {
        Self {
            player_id: uuid::Uuid::new_v4().to_string(),
            energy: ENERGY_MAX,
            hunger: 0,
            coins: 0,
            xp: 0,
            streak: 0,
            reputation: 0,
            stats: PlayerStats::default(),
            owned_items: HashSet::new(),
            unlocked_professions: vec![DEFAULT_PROFESSION_ID.to_string()],
            last_rest_at: None,
            created_at: current_time,
        }
    }

    /// Creates a fresh account stamped with the current wall clock.
    pub fn new_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    /// Current level, always derived from XP.
    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    /// True iff the player has enough energy to start a quiz or case.
    pub fn can_play(&self) -> bool {
        self.energy >= MIN_ENERGY_TO_PLAY
    }

    /// Deducts energy if available. No partial spend: on failure the
    /// balance is untouched.
    ///
    /// The amount must already be the effective cost, i.e. doubled by
    /// the caller via [`quiz_energy_cost`] when hunger is above the
    /// penalty threshold.
    ///
    /// [`quiz_energy_cost`]: crate::core::progression::quiz_energy_cost
    pub fn spend_energy(&mut self, amount: u32) -> bool {
        if amount == 0 || self.energy < amount {
            return false;
        }
        self.energy -= amount;
        true
    }

    /// Advances hunger for elapsed wall time. Only full 30-minute
    /// windows count; the external tick collaborator supplies the
    /// elapsed duration.
    pub fn advance_hunger(&mut self, elapsed_minutes: u64) {
        let windows = (elapsed_minutes / HUNGER_INTERVAL_MINUTES) as u32;
        self.hunger = (self.hunger + windows * HUNGER_PER_INTERVAL).min(HUNGER_MAX);
    }

    /// Cooldown-gated energy refill. Succeeds when no rest has been
    /// taken yet or the cooldown has fully elapsed (boundary
    /// inclusive). On failure nothing changes.
    pub fn rest(&mut self, now: i64) -> bool {
        let off_cooldown = match self.last_rest_at {
            None => true,
            Some(last) => now - last >= REST_COOLDOWN_SECONDS,
        };
        if !off_cooldown {
            return false;
        }
        self.energy = (self.energy + REST_ENERGY_RESTORE).min(ENERGY_MAX);
        self.last_rest_at = Some(now);
        true
    }

    /// Applies a food item's effect. Unconditional: affordability was
    /// already validated by the purchase flow.
    pub fn feed_character(&mut self, hunger_restore: u32, energy_bonus: u32) {
        self.hunger = self.hunger.saturating_sub(hunger_restore);
        self.energy = (self.energy + energy_bonus).min(ENERGY_MAX);
    }

    /// Awards XP and reports whether the derived level increased.
    pub fn earn_xp(&mut self, amount: u64) -> LevelUp {
        let before = self.level();
        self.xp += amount;
        let after = self.level();
        LevelUp {
            new_level: after,
            leveled_up: after > before,
        }
    }

    /// Records a finished quiz. The reputation delta is policy decided
    /// by the case-evaluation collaborator; it is clamped into
    /// `[0, REPUTATION_MAX]` here regardless of what the caller sends.
    pub fn record_quiz_result(&mut self, correct: u32, total: u32, reputation_delta: i32) {
        self.stats.quizzes_taken += 1;
        self.stats.total_correct_answers += correct.min(total) as u64;
        let adjusted = self.reputation as i64 + reputation_delta as i64;
        self.reputation = adjusted.clamp(0, REPUTATION_MAX as i64) as u32;
    }

    /// Records a completed clinical case.
    pub fn record_case_completion(&mut self) {
        self.stats.cases_completed += 1;
    }

    /// Adds study time to the lifetime counter.
    pub fn add_study_minutes(&mut self, minutes: u64) {
        self.stats.total_study_minutes += minutes;
    }

    /// Deducts coins if available. The single path through which
    /// currency leaves the account; every spending feature routes
    /// through it.
    pub fn spend_coins(&mut self, amount: u64) -> bool {
        if self.coins < amount {
            return false;
        }
        self.coins -= amount;
        true
    }

    /// Adds coins (quiz rewards, bonuses).
    pub fn earn_coins(&mut self, amount: u64) {
        self.coins += amount;
    }

    /// Purchases a durable item. Fails without mutation when the item
    /// is already owned or unaffordable; owning twice is impossible.
    ///
    /// Food items never take this path; they are consumable and go
    /// through [`spend_coins`](Self::spend_coins) +
    /// [`feed_character`](Self::feed_character).
    pub fn buy_item(&mut self, item_id: &str, price: u64) -> bool {
        if self.owned_items.contains(item_id) {
            return false;
        }
        if !self.spend_coins(price) {
            return false;
        }
        self.owned_items.insert(item_id.to_string());
        true
    }

    /// Updates the consecutive-day streak. Day boundaries come from
    /// the external clock collaborator as a [`PlayContinuity`].
    pub fn update_streak(&mut self, continuity: PlayContinuity) {
        match continuity {
            PlayContinuity::SameDay => {}
            PlayContinuity::NextDay => self.streak += 1,
            PlayContinuity::Lapsed => self.streak = 1,
        }
        self.stats.best_streak = self.stats.best_streak.max(self.streak);
    }

    /// Appends a profession to the unlock sequence. Invoked by the
    /// career collaborator when an unlock condition fires. Returns
    /// false if already unlocked (sequence is append-only, no dupes).
    pub fn unlock_profession(&mut self, profession_id: &str) -> bool {
        if self.unlocked_professions.iter().any(|p| p == profession_id) {
            return false;
        }
        self.unlocked_professions.push(profession_id.to_string());
        true
    }

    /// The most recently unlocked profession.
    pub fn current_specialty(&self) -> &str {
        self.unlocked_professions
            .last()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_PROFESSION_ID)
    }

    /// Lifetime accuracy in `[0.0, 1.0]`; 0.0 before the first quiz.
    pub fn accuracy(&self) -> f64 {
        accuracy_rate(self.stats.total_correct_answers, self.stats.quizzes_taken)
    }
}
