//! Clean up after the pet (hearts ruleset).

use crate::action::{ActionReceipt, ActionTransition};
use crate::env::SimEnv;
use crate::state::{PetState, Vitals};

/// Clears every poop pile at once. Refused when there is nothing to clean,
/// which is always the case under the meters ruleset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CleanError {
    #[error("Nothing to clean up here.")]
    NothingToClean,
}

impl ActionTransition for CleanAction {
    type Error = CleanError;

    fn pre_validate(&self, state: &PetState, _env: &SimEnv<'_>) -> Result<(), Self::Error> {
        match &state.vitals {
            Vitals::Hearts(h) if h.poop_count > 0 => Ok(()),
            _ => Err(CleanError::NothingToClean),
        }
    }

    fn apply(&self, state: &mut PetState, _env: &SimEnv<'_>) -> ActionReceipt {
        if let Vitals::Hearts(h) = &mut state.vitals {
            h.poop_count = 0;
        }
        ActionReceipt::new(0, "All cleaned up!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Ruleset, SimConfig};
    use crate::env::PcgRng;
    use chrono::DateTime;

    fn env(config: &SimConfig) -> SimEnv<'_> {
        SimEnv {
            config,
            rng: &PcgRng,
            session_seed: 0,
            nonce: 0,
        }
    }

    #[test]
    fn clean_clears_all_poop() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let mut state = PetState::newborn(&config, DateTime::from_timestamp(0, 0).unwrap());
        state.hearts_mut().unwrap().poop_count = 3;

        CleanAction.pre_validate(&state, &env(&config)).unwrap();
        CleanAction.apply(&mut state, &env(&config));
        assert_eq!(state.hearts().unwrap().poop_count, 0);
    }

    #[test]
    fn refused_when_spotless_or_wrong_ruleset() {
        let hearts = SimConfig::with_ruleset(Ruleset::Hearts);
        let state = PetState::newborn(&hearts, DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(
            CleanAction.pre_validate(&state, &env(&hearts)).unwrap_err(),
            CleanError::NothingToClean
        );

        let meters = SimConfig::default();
        let state = PetState::newborn(&meters, DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(
            CleanAction.pre_validate(&state, &env(&meters)).unwrap_err(),
            CleanError::NothingToClean
        );
    }
}
