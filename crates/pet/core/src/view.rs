//! Presentation snapshot derived from the canonical state.
//!
//! Widgets render from [`PetView`], never from [`PetState`] directly, so the
//! derived facts (emotion, weather, day phase, progress fraction) are
//! computed in one place and the frontend stays read-only.

use chrono::{DateTime, Utc};

use crate::achievements::Achievement;
use crate::clock::{self, DayPhase, Weather};
use crate::config::SimConfig;
use crate::env::RngOracle;
use crate::state::{JournalEntry, PetState, Vitals};
use crate::stats::{self, Emotion};

/// How many journal lines a snapshot carries.
const JOURNAL_LINES: usize = 32;

/// Everything the presentation layer may ask about the pet.
#[derive(Clone, Debug)]
pub struct PetView {
    pub name: String,
    pub emotion: Emotion,
    pub weather: Weather,
    pub day_phase: DayPhase,
    pub vitals: VitalsView,
    /// Unlock order is not tracked; sorted by identifier.
    pub achievements: Vec<Achievement>,
    /// Newest first.
    pub journal: Vec<JournalEntry>,
}

/// Stat readout for the active ruleset.
#[derive(Clone, Debug)]
pub enum VitalsView {
    Meters {
        level: u32,
        xp: u64,
        xp_to_next: u64,
        /// Fraction of the level bar filled, in `[0, 1]`.
        progress: f64,
        hunger: f64,
        happiness: f64,
        energy: f64,
        commits: u64,
        commands: u64,
        files: u64,
    },
    Hearts {
        hunger_hearts: u8,
        health_hearts: u8,
        weight: f64,
        poop_count: u8,
        session_age_hours: f64,
        lifetime_hours: f64,
    },
}

/// Build the snapshot for `now`.
pub fn build(
    config: &SimConfig,
    rng: &dyn RngOracle,
    session_seed: u64,
    state: &PetState,
    now: DateTime<Utc>,
) -> PetView {
    let vitals = match &state.vitals {
        Vitals::Meters(m) => VitalsView::Meters {
            level: m.level,
            xp: m.xp,
            xp_to_next: m.xp_to_next(),
            progress: m.xp_progress(),
            hunger: m.hunger.value(),
            happiness: m.happiness.value(),
            energy: m.energy.value(),
            commits: m.commits,
            commands: m.commands,
            files: m.files,
        },
        Vitals::Hearts(h) => VitalsView::Hearts {
            hunger_hearts: h.hunger_hearts,
            health_hearts: h.health_hearts,
            weight: h.weight,
            poop_count: h.poop_count,
            session_age_hours: h.session_age_hours,
            lifetime_hours: h.lifetime_hours,
        },
    };

    PetView {
        name: state.name.clone(),
        emotion: stats::emotion_of(&state.vitals),
        weather: clock::weather_at(rng, session_seed, now, config),
        day_phase: clock::day_phase_at(now, config),
        vitals,
        achievements: state.achievements.iter().copied().collect(),
        journal: state.journal.recent(JOURNAL_LINES).cloned().collect(),
    }
}
