//! Deterministic environment facts injected into the engine.
//!
//! The engine never reads ambient state: configuration and randomness arrive
//! through [`SimEnv`], so identical inputs always replay identically.

mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::SimConfig;

/// Read-only environment handed to action transitions and tick logic.
pub struct SimEnv<'a> {
    pub config: &'a SimConfig,
    pub rng: &'a dyn RngOracle,
    /// Base seed fixed for the process lifetime (or pinned by tests).
    pub session_seed: u64,
    /// Sequence number of the event being processed; advances per event so
    /// repeated draws within a session stay independent.
    pub nonce: u64,
}

impl SimEnv<'_> {
    /// Derive the seed for one named draw inside the current event.
    pub fn roll_seed(&self, context: u32) -> u64 {
        compute_seed(self.session_seed, self.nonce, context)
    }
}

/// Draw contexts, one per independent roll an event can make.
pub mod roll {
    pub const ACTION_AMOUNT: u32 = 0;
    pub const ACTION_FLAVOR: u32 = 1;
    pub const ACTION_EXTRA: u32 = 2;
    pub const BONUS_CHANCE: u32 = 3;
    pub const BONUS_PICK: u32 = 4;
    pub const WEATHER: u32 = 5;
    pub const WHINE_HUNGER: u32 = 6;
    pub const WHINE_HAPPINESS: u32 = 7;
    pub const WHINE_ENERGY: u32 = 8;
}
