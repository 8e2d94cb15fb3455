//! Code alongside the pet: the big XP earner.

use crate::action::{ActionReceipt, ActionTransition};
use crate::env::{SimEnv, roll};
use crate::state::{PetState, Vitals};

const CODE_LINES: &[&str] = &["SHIPPED!", "MERGED PR!", "FIXED BUG!", "REFACTORED!"];

/// Grants a rolled XP jackpot and bumps the commit counters, at a cost to
/// energy and hunger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodeAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("Too exhausted to code! Need rest.")]
    TooExhausted,
}

impl ActionTransition for CodeAction {
    type Error = CodeError;

    fn pre_validate(&self, state: &PetState, env: &SimEnv<'_>) -> Result<(), Self::Error> {
        if let Vitals::Meters(m) = &state.vitals
            && m.energy.value() < env.config.code_energy_min
        {
            return Err(CodeError::TooExhausted);
        }
        Ok(())
    }

    fn apply(&self, state: &mut PetState, env: &SimEnv<'_>) -> ActionReceipt {
        match &mut state.vitals {
            Vitals::Meters(m) => {
                let xp = u64::from(env.rng.range(
                    env.roll_seed(roll::ACTION_AMOUNT),
                    env.config.code_xp_min,
                    env.config.code_xp_max,
                ));
                m.happiness.add(env.config.code_happiness);
                m.energy.add(-env.config.code_energy);
                m.hunger.add(-env.config.code_hunger);
                m.commits += 1;
                m.files += u64::from(env.rng.range(env.roll_seed(roll::ACTION_EXTRA), 1, 5));

                let line =
                    CODE_LINES[env.rng.index(env.roll_seed(roll::ACTION_FLAVOR), CODE_LINES.len())];
                ActionReceipt::reward(xp, format!("{line} +{xp} XP"))
            }
            // Hearts pets watch you type; no stats move.
            Vitals::Hearts(_) => ActionReceipt::new(0, "*watches the cursor blink*"),
        }
    }
}
