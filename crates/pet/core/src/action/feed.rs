//! Feed the pet.

use crate::action::{ActionReceipt, ActionTransition};
use crate::config::SimConfig;
use crate::env::SimEnv;
use crate::state::{PetState, Vitals};

/// Restores hunger and a little happiness; refused when the pet is already
/// full (meters near the top, or all hunger hearts present).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("I'm already full!")]
    AlreadyFull,
}

impl ActionTransition for FeedAction {
    type Error = FeedError;

    fn pre_validate(&self, state: &PetState, env: &SimEnv<'_>) -> Result<(), Self::Error> {
        match &state.vitals {
            Vitals::Meters(m) => {
                if m.hunger.value() >= env.config.feed_full_threshold {
                    return Err(FeedError::AlreadyFull);
                }
            }
            Vitals::Hearts(h) => {
                if h.hunger_hearts >= SimConfig::MAX_HEARTS {
                    return Err(FeedError::AlreadyFull);
                }
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut PetState, env: &SimEnv<'_>) -> ActionReceipt {
        let xp = match &mut state.vitals {
            Vitals::Meters(m) => {
                m.hunger.add(env.config.feed_hunger);
                m.happiness.add(env.config.feed_happiness);
                env.config.feed_xp
            }
            Vitals::Hearts(h) => {
                h.gain_hunger(1);
                h.weight += env.config.feed_weight_gain;
                0
            }
        };
        ActionReceipt::new(xp, "Nom nom nom! Thanks!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ruleset;
    use crate::env::PcgRng;
    use crate::stats::Meter;
    use chrono::DateTime;

    fn env(config: &SimConfig) -> SimEnv<'_> {
        SimEnv {
            config,
            rng: &PcgRng,
            session_seed: 0,
            nonce: 0,
        }
    }

    fn meters_state(config: &SimConfig, hunger: f64) -> PetState {
        let mut state = PetState::newborn(config, DateTime::from_timestamp(0, 0).unwrap());
        state.meters_mut().unwrap().hunger = Meter::new(hunger);
        state
    }

    #[test]
    fn feeds_below_threshold() {
        let config = SimConfig::default();
        let mut state = meters_state(&config, 40.0);
        let env = env(&config);

        FeedAction.pre_validate(&state, &env).unwrap();
        let receipt = FeedAction.apply(&mut state, &env);

        let m = state.meters().unwrap();
        assert_eq!(m.hunger.value(), 70.0);
        assert_eq!(m.happiness.value(), 100.0);
        assert_eq!(receipt.xp, 10);
    }

    #[test]
    fn refuses_when_nearly_full() {
        let config = SimConfig::default();
        let env = env(&config);

        // 10 < 95: allowed. 97 >= 95: refused.
        assert!(
            FeedAction
                .pre_validate(&meters_state(&config, 10.0), &env)
                .is_ok()
        );
        assert_eq!(
            FeedAction
                .pre_validate(&meters_state(&config, 97.0), &env)
                .unwrap_err(),
            FeedError::AlreadyFull
        );
    }

    #[test]
    fn hearts_feed_adds_heart_and_weight() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let mut state = PetState::newborn(&config, DateTime::from_timestamp(0, 0).unwrap());
        state.hearts_mut().unwrap().hunger_hearts = 2;
        let env = env(&config);

        FeedAction.pre_validate(&state, &env).unwrap();
        FeedAction.apply(&mut state, &env);

        let h = state.hearts().unwrap();
        assert_eq!(h.hunger_hearts, 3);
        assert_eq!(h.weight, SimConfig::BASE_WEIGHT + 0.5);
    }

    #[test]
    fn hearts_feed_refused_at_four_hearts() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let state = PetState::newborn(&config, DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(
            FeedAction.pre_validate(&state, &env(&config)).unwrap_err(),
            FeedError::AlreadyFull
        );
    }
}
