//! Deterministic pet simulation logic shared across the runtime and clients.
//!
//! `pet-core` defines the canonical rules (actions, engine, pet state) and
//! exposes pure APIs: every entry point takes explicit state and an explicit
//! timestamp, so the same inputs always produce the same outputs. All state
//! mutation flows through [`engine::PetEngine`], and supporting crates depend
//! on the types re-exported here.
pub mod action;
pub mod achievements;
pub mod clock;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;
pub mod stats;
pub mod view;

pub use action::{
    Action, ActionReceipt, ActionTransition, CleanAction, CleanError, CodeAction, CodeError,
    ExecuteError, FeedAction, FeedError, NeverRejected, PlayAction, PlayError, SleepAction,
};
pub use achievements::Achievement;
pub use clock::{DayPhase, IdleReport, Weather};
pub use config::{Ruleset, SimConfig};
pub use engine::{ActionOutcome, PetEngine};
pub use env::{PcgRng, RngOracle, SimEnv, compute_seed};
pub use state::{HeartVitals, Journal, JournalEntry, JournalLevel, MeterVitals, PetState, Vitals};
pub use stats::{Emotion, Meter};
pub use view::{PetView, VitalsView};
