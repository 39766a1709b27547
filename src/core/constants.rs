// Resource bounds
pub const ENERGY_MAX: u32 = 100;
pub const HUNGER_MAX: u32 = 100;
pub const REPUTATION_MAX: u32 = 5;

// Play gating
pub const MIN_ENERGY_TO_PLAY: u32 = 40;

// Hunger penalty: above this, quiz energy cost doubles.
// The UI warning threshold is kept as a separate constant because game
// design may diverge them later; today they are identical.
pub const HUNGER_PENALTY_THRESHOLD: u32 = 70;
pub const HUNGER_WARNING_THRESHOLD: u32 = 70;
pub const HUNGER_COST_MULTIPLIER: u32 = 2;

// Hunger decay: +5 per full 30-minute window elapsed
pub const HUNGER_PER_INTERVAL: u32 = 5;
pub const HUNGER_INTERVAL_MINUTES: u64 = 30;

// Rest
pub const REST_COOLDOWN_SECONDS: i64 = 2 * 60 * 60;
pub const REST_ENERGY_RESTORE: u32 = 50;

// XP and leveling: level = xp / XP_PER_LEVEL + 1
pub const XP_PER_LEVEL: u64 = 1000;

// Quiz shape (accuracy rate denominator)
pub const QUESTIONS_PER_QUIZ: u64 = 10;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x4D45_4451_5553_5401; // "MEDQUST" + version 1
