//! Put the pet to sleep.

use crate::action::{ActionReceipt, ActionTransition, NeverRejected};
use crate::env::SimEnv;
use crate::state::{PetState, Vitals};

/// Restores energy at a small hunger cost. Sleep is always allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SleepAction;

impl ActionTransition for SleepAction {
    type Error = NeverRejected;

    fn apply(&self, state: &mut PetState, env: &SimEnv<'_>) -> ActionReceipt {
        let xp = match &mut state.vitals {
            Vitals::Meters(m) => {
                m.energy.add(env.config.sleep_energy);
                m.hunger.add(-env.config.sleep_hunger);
                env.config.sleep_xp
            }
            // A nap never hurts, but hearts pets get nothing out of it.
            Vitals::Hearts(_) => 0,
        };
        ActionReceipt::new(xp, "Zzz... *yawn* Refreshed!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::env::PcgRng;
    use crate::stats::Meter;
    use chrono::DateTime;

    #[test]
    fn sleep_restores_energy() {
        let config = SimConfig::default();
        let mut state = PetState::newborn(&config, DateTime::from_timestamp(0, 0).unwrap());
        {
            let m = state.meters_mut().unwrap();
            m.energy = Meter::new(25.0);
            m.hunger = Meter::new(60.0);
        }
        let env = SimEnv {
            config: &config,
            rng: &PcgRng,
            session_seed: 0,
            nonce: 0,
        };

        let receipt = SleepAction.apply(&mut state, &env);

        let m = state.meters().unwrap();
        assert_eq!(m.energy.value(), 65.0);
        assert_eq!(m.hunger.value(), 55.0);
        assert_eq!(receipt.xp, 8);
    }
}
