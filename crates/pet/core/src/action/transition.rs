use crate::env::SimEnv;
use crate::state::{JournalLevel, PetState};

/// What an applied action produced: the XP to grant and the journal line to
/// append. The engine owns leveling and achievement sweeps, so transitions
/// only report the raw grant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReceipt {
    pub xp: u64,
    pub line: String,
    pub level: JournalLevel,
}

impl ActionReceipt {
    pub fn new(xp: u64, line: impl Into<String>) -> Self {
        Self {
            xp,
            line: line.into(),
            level: JournalLevel::Info,
        }
    }

    pub fn reward(xp: u64, line: impl Into<String>) -> Self {
        Self {
            xp,
            line: line.into(),
            level: JournalLevel::Reward,
        }
    }
}

/// Defines how a concrete action variant validates and mutates pet state.
///
/// `pre_validate` is a pure query: it must not touch the state. `apply` may
/// assume the precondition held and must leave every stat inside its domain
/// (the meters clamp on mutation, so this falls out for free). All
/// randomness comes from `env`.
pub trait ActionTransition {
    type Error;

    /// Checks the precondition against the state **before** mutation.
    fn pre_validate(&self, _state: &PetState, _env: &SimEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Runs only after `pre_validate` succeeded, so a
    /// partial effect is impossible: rejection happens before the first
    /// mutation or not at all.
    fn apply(&self, state: &mut PetState, env: &SimEnv<'_>) -> ActionReceipt;
}
