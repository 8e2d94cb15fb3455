//! Play with the pet.

use crate::action::{ActionReceipt, ActionTransition};
use crate::env::{SimEnv, roll};
use crate::state::{PetState, Vitals};

const PLAY_LINES: &[&str] = &[
    "Wheee! That was fun!",
    "You got me! Hehe!",
    "Catch me if you can!",
    "Great play!",
];

/// Boosts happiness at an energy cost; a tired pet refuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("Too tired to play... need sleep.")]
    TooTired,

    #[error("Too weak to play right now...")]
    TooWeak,
}

impl ActionTransition for PlayAction {
    type Error = PlayError;

    fn pre_validate(&self, state: &PetState, env: &SimEnv<'_>) -> Result<(), Self::Error> {
        match &state.vitals {
            Vitals::Meters(m) => {
                if m.energy.value() < env.config.play_energy_min {
                    return Err(PlayError::TooTired);
                }
            }
            Vitals::Hearts(h) => {
                if h.health_hearts == 0 {
                    return Err(PlayError::TooWeak);
                }
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut PetState, env: &SimEnv<'_>) -> ActionReceipt {
        let xp = match &mut state.vitals {
            Vitals::Meters(m) => {
                m.happiness.add(env.config.play_happiness);
                m.energy.add(-env.config.play_energy);
                env.config.play_xp
            }
            Vitals::Hearts(h) => {
                h.burn_weight(env.config.play_weight_loss);
                0
            }
        };
        let line = PLAY_LINES[env
            .rng
            .index(env.roll_seed(roll::ACTION_FLAVOR), PLAY_LINES.len())];
        ActionReceipt::new(xp, line)
    }
}
