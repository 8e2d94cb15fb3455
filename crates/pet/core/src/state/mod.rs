//! Canonical pet state.
//!
//! [`PetState`] is the single authoritative struct: created once at startup
//! (fresh or from a snapshot), mutated only through [`crate::PetEngine`]
//! entry points, persisted as a JSON object by the runtime's repository.

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Utc};

use crate::achievements::Achievement;
use crate::config::SimConfig;
use crate::stats::Meter;

/// The whole persisted world: one pet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetState {
    /// Immutable after creation.
    pub name: String,
    pub born_at: DateTime<Utc>,
    /// Last instant the engine observed; drives idle reconciliation and is
    /// not gameplay-visible.
    pub last_seen_at: DateTime<Utc>,
    pub vitals: Vitals,
    /// Append-only set; an unlock is never re-evaluated or removed.
    pub achievements: BTreeSet<Achievement>,
    pub journal: Journal,
}

impl PetState {
    /// A fresh pet under the configured ruleset.
    pub fn newborn(config: &SimConfig, now: DateTime<Utc>) -> Self {
        let vitals = match config.ruleset {
            crate::config::Ruleset::Meters => Vitals::Meters(MeterVitals::newborn()),
            crate::config::Ruleset::Hearts => Vitals::Hearts(HeartVitals::newborn()),
        };
        Self {
            name: config.pet_name.clone(),
            born_at: now,
            last_seen_at: now,
            vitals,
            achievements: BTreeSet::new(),
            journal: Journal::new(config.journal_capacity),
        }
    }

    pub fn meters(&self) -> Option<&MeterVitals> {
        match &self.vitals {
            Vitals::Meters(m) => Some(m),
            Vitals::Hearts(_) => None,
        }
    }

    pub fn meters_mut(&mut self) -> Option<&mut MeterVitals> {
        match &mut self.vitals {
            Vitals::Meters(m) => Some(m),
            Vitals::Hearts(_) => None,
        }
    }

    pub fn hearts(&self) -> Option<&HeartVitals> {
        match &self.vitals {
            Vitals::Hearts(h) => Some(h),
            Vitals::Meters(_) => None,
        }
    }

    pub fn hearts_mut(&mut self) -> Option<&mut HeartVitals> {
        match &mut self.vitals {
            Vitals::Hearts(h) => Some(h),
            Vitals::Meters(_) => None,
        }
    }
}

/// Stat model the pet lives under, tagged so the save file self-describes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "ruleset", rename_all = "snake_case"))]
pub enum Vitals {
    Meters(MeterVitals),
    Hearts(HeartVitals),
}

/// Percentage meters plus XP/leveling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterVitals {
    pub level: u32,
    /// XP within the current level; resets (carrying remainder) at each
    /// crossing.
    pub xp: u64,
    pub hunger: Meter,
    pub happiness: Meter,
    pub energy: Meter,
    pub commits: u64,
    pub commands: u64,
    pub files: u64,
}

impl MeterVitals {
    // Stat restore granted at every level crossing.
    const LEVELUP_HUNGER: f64 = 20.0;
    const LEVELUP_HAPPINESS: f64 = 30.0;
    const LEVELUP_ENERGY: f64 = 25.0;

    pub fn newborn() -> Self {
        Self {
            level: 1,
            xp: 0,
            hunger: Meter::FULL,
            happiness: Meter::FULL,
            energy: Meter::FULL,
            commits: 0,
            commands: 0,
            files: 0,
        }
    }

    /// XP needed to leave the current level.
    pub fn xp_to_next(&self) -> u64 {
        u64::from(self.level) * SimConfig::XP_PER_LEVEL
    }

    /// Fraction of the current level's bar filled, in `[0, 1]`.
    pub fn xp_progress(&self) -> f64 {
        (self.xp as f64 / self.xp_to_next() as f64).min(1.0)
    }

    /// Grant XP and resolve every level crossing the gain covers.
    ///
    /// Each crossing subtracts the *old* threshold, bumps the level once,
    /// and restores part of the meters. Returns the number of levels gained
    /// so the caller can journal each one. At [`SimConfig::LEVEL_CAP`] the
    /// XP keeps accruing but no further crossings happen.
    pub fn grant_xp(&mut self, amount: u64) -> u32 {
        self.xp += amount;

        let mut gained = 0;
        while self.level < SimConfig::LEVEL_CAP && self.xp >= self.xp_to_next() {
            self.xp -= self.xp_to_next();
            self.level += 1;
            gained += 1;

            self.hunger.add(Self::LEVELUP_HUNGER);
            self.happiness.add(Self::LEVELUP_HAPPINESS);
            self.energy.add(Self::LEVELUP_ENERGY);
        }
        gained
    }
}

/// Discrete hearts with weight and poop care.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartVitals {
    pub hunger_hearts: u8,
    pub health_hearts: u8,
    pub weight: f64,
    pub poop_count: u8,
    /// Hours since process start; reset to 0 by initialize.
    pub session_age_hours: f64,
    /// Hours alive in total, across every session.
    pub lifetime_hours: f64,
}

impl HeartVitals {
    pub fn newborn() -> Self {
        Self {
            hunger_hearts: SimConfig::MAX_HEARTS,
            health_hearts: SimConfig::MAX_HEARTS,
            weight: SimConfig::BASE_WEIGHT,
            poop_count: 0,
            session_age_hours: 0.0,
            lifetime_hours: 0.0,
        }
    }

    pub fn lose_hunger(&mut self, hearts: u8) {
        self.hunger_hearts = self.hunger_hearts.saturating_sub(hearts);
    }

    pub fn gain_hunger(&mut self, hearts: u8) {
        self.hunger_hearts = (self.hunger_hearts + hearts).min(SimConfig::MAX_HEARTS);
    }

    pub fn lose_health(&mut self) {
        self.health_hearts = self.health_hearts.saturating_sub(1);
    }

    pub fn gain_health(&mut self) {
        self.health_hearts = (self.health_hearts + 1).min(SimConfig::MAX_HEARTS);
    }

    /// Burn weight toward the base-weight floor.
    pub fn burn_weight(&mut self, amount: f64) {
        self.weight = (self.weight - amount).max(SimConfig::BASE_WEIGHT);
    }
}

/// Importance of a journal line, used by the client for styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JournalLevel {
    #[default]
    Info,
    Reward,
    Complaint,
}

/// One line of the activity log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    pub level: JournalLevel,
    pub text: String,
}

impl JournalEntry {
    pub fn new(at: DateTime<Utc>, level: JournalLevel, text: impl Into<String>) -> Self {
        Self {
            at,
            level,
            text: text.into(),
        }
    }
}

/// Bounded chronological activity log; the oldest entry is evicted once the
/// capacity is reached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: JournalEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }
}
