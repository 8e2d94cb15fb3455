//! Simulation configuration constants and tunable parameters.

/// Which stat model a pet lives under.
///
/// The two rulesets share the same save/tick/action surface but never mix:
/// a pet is created under one ruleset and keeps it for life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ruleset {
    /// Percentage meters plus XP/leveling (the default game).
    #[default]
    Meters,
    /// Discrete hunger/health hearts with weight and poop care.
    Hearts,
}

/// Tunable rules of the simulation.
///
/// All decay rates are *per minute* of wall-clock time; the engine scales
/// them by the actual elapsed duration, so tick granularity never changes
/// behavior. Window lengths are in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Ruleset newly created pets are born under.
    pub ruleset: Ruleset,
    /// Name given to a newly created pet.
    pub pet_name: String,

    // ===== meter decay, per minute =====
    pub hunger_decay: f64,
    pub happiness_decay: f64,
    pub energy_decay: f64,

    // ===== action effects (Meters) =====
    pub feed_hunger: f64,
    pub feed_happiness: f64,
    pub feed_xp: u64,
    pub play_happiness: f64,
    pub play_energy: f64,
    pub play_xp: u64,
    pub sleep_energy: f64,
    pub sleep_hunger: f64,
    pub sleep_xp: u64,
    pub code_happiness: f64,
    pub code_energy: f64,
    pub code_hunger: f64,
    pub code_xp_min: u32,
    pub code_xp_max: u32,

    // ===== action preconditions =====
    pub feed_full_threshold: f64,
    pub play_energy_min: f64,
    pub code_energy_min: f64,

    // ===== periodic triggers =====
    pub bonus_window_secs: u32,
    pub bonus_chance_percent: u32,
    pub weather_window_secs: u32,
    pub whine_window_secs: u32,
    pub whine_threshold: f64,
    pub whine_chance_percent: u32,

    // ===== hearts ruleset cadences =====
    pub hunger_heart_window_secs: u32,
    pub poop_window_secs: u32,
    pub health_decay_window_secs: u32,
    pub health_regen_window_secs: u32,
    pub feed_weight_gain: f64,
    pub play_weight_loss: f64,

    // ===== day/night schedule (UTC hours) =====
    pub day_start_hour: u32,
    pub day_end_hour: u32,

    /// Bounded length of the activity journal.
    pub journal_capacity: usize,
}

impl SimConfig {
    // ===== fixed rules, not meant to be tuned =====
    /// Levels never exceed this; XP keeps accruing at the cap.
    pub const LEVEL_CAP: u32 = 100;
    /// XP needed to leave a level: `level * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u64 = 1000;
    /// Hearts meters run 0..=4.
    pub const MAX_HEARTS: u8 = 4;
    /// Poop piles cap at 3.
    pub const MAX_POOP: u8 = 3;
    /// Hearts pets are born at this weight and never fall below it.
    pub const BASE_WEIGHT: f64 = 5.0;

    pub fn new() -> Self {
        Self {
            ruleset: Ruleset::Meters,
            pet_name: "Lofty".to_string(),

            hunger_decay: 0.6,
            happiness_decay: 0.48,
            energy_decay: 0.3,

            feed_hunger: 30.0,
            feed_happiness: 5.0,
            feed_xp: 10,
            play_happiness: 25.0,
            play_energy: 10.0,
            play_xp: 15,
            sleep_energy: 40.0,
            sleep_hunger: 5.0,
            sleep_xp: 8,
            code_happiness: 20.0,
            code_energy: 15.0,
            code_hunger: 10.0,
            code_xp_min: 100,
            code_xp_max: 500,

            feed_full_threshold: 95.0,
            play_energy_min: 20.0,
            code_energy_min: 15.0,

            bonus_window_secs: 30,
            bonus_chance_percent: 30,
            weather_window_secs: 120,
            whine_window_secs: 60,
            whine_threshold: 20.0,
            whine_chance_percent: 10,

            hunger_heart_window_secs: 3600,
            poop_window_secs: 600,
            health_decay_window_secs: 60,
            health_regen_window_secs: 180,
            feed_weight_gain: 0.5,
            play_weight_loss: 0.2,

            day_start_hour: 7,
            day_end_hour: 19,

            journal_capacity: 64,
        }
    }

    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..Self::new()
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
