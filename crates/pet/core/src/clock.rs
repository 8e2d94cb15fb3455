//! Time-derived facts: elapsed-time decay, trigger windows, day/night and
//! weather.
//!
//! Everything here is a pure function of timestamps (plus the session seed
//! for weather), so derived state can be recomputed anywhere and always
//! agrees. Nothing in this module is persisted.

use chrono::{DateTime, Timelike, Utc};

use crate::config::SimConfig;
use crate::env::{RngOracle, compute_seed, roll};
use crate::state::MeterVitals;

/// Sky state shown in the header; redrawn at fixed window boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Weather {
    Clear,
    Rain,
    Snow,
}

const WEATHER_TABLE: &[Weather] = &[Weather::Clear, Weather::Rain, Weather::Snow];

/// Day or night, from the configured schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DayPhase {
    Day,
    Night,
}

/// Minutes between two instants, clamped at zero so clock skew in a stale
/// save can never produce negative decay.
pub fn minutes_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let secs = later.signed_duration_since(earlier).num_milliseconds() as f64 / 1000.0;
    (secs / 60.0).max(0.0)
}

/// Indices of the fixed-length windows whose boundary fell in `(prev, now]`.
///
/// Drives every periodic trigger (bonus events, poop, heart decay): the
/// result depends only on the two timestamps, never on how often the host
/// ticks.
pub fn windows_crossed(
    prev: DateTime<Utc>,
    now: DateTime<Utc>,
    window_secs: u32,
) -> impl Iterator<Item = i64> {
    let len = i64::from(window_secs.max(1));
    let first = prev.timestamp().div_euclid(len) + 1;
    let last = now.timestamp().div_euclid(len);
    first..=last
}

/// Weather for the window containing `now`. Stable within a window, redrawn
/// uniformly at the next boundary.
pub fn weather_at(
    rng: &dyn RngOracle,
    session_seed: u64,
    now: DateTime<Utc>,
    config: &SimConfig,
) -> Weather {
    let window = now
        .timestamp()
        .div_euclid(i64::from(config.weather_window_secs.max(1)));
    let seed = compute_seed(session_seed, window as u64, roll::WEATHER);
    WEATHER_TABLE[rng.index(seed, WEATHER_TABLE.len())]
}

/// Day/night from the configured UTC-hour schedule.
pub fn day_phase_at(now: DateTime<Utc>, config: &SimConfig) -> DayPhase {
    let hour = now.hour();
    if hour >= config.day_start_hour && hour < config.day_end_hour {
        DayPhase::Day
    } else {
        DayPhase::Night
    }
}

/// Apply `minutes` of meter decay at the configured per-minute rates,
/// clamped at the domain floor. Returns (hunger, happiness, energy) actually
/// lost.
pub fn decay_meters(m: &mut MeterVitals, minutes: f64, config: &SimConfig) -> (f64, f64, f64) {
    let before = (m.hunger.value(), m.happiness.value(), m.energy.value());
    m.hunger.add(-config.hunger_decay * minutes);
    m.happiness.add(-config.happiness_decay * minutes);
    m.energy.add(-config.energy_decay * minutes);
    (
        before.0 - m.hunger.value(),
        before.1 - m.happiness.value(),
        before.2 - m.energy.value(),
    )
}

/// Summary of what idle reconciliation did, for the welcome-back journal
/// line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdleReport {
    pub away_minutes: f64,
    pub hunger_lost: f64,
    pub happiness_lost: f64,
    pub energy_lost: f64,
    pub hunger_hearts_lost: u8,
}

impl IdleReport {
    /// True when the absence was long enough to be worth mentioning.
    pub fn is_notable(&self) -> bool {
        self.away_minutes >= 1.0
    }
}
