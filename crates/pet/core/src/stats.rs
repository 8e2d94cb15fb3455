//! Clamped stat meters and emotion classification.

use crate::state::{HeartVitals, MeterVitals, Vitals};

/// A percentage stat pinned to `[0, 100]`.
///
/// Every mutation clamps, so no sequence of actions or ticks can push the
/// value out of its domain. Out-of-range writes are silent corrections, not
/// errors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Meter(f64);

impl Meter {
    pub const FULL: Meter = Meter(100.0);
    pub const EMPTY: Meter = Meter(0.0);

    pub fn new(value: f64) -> Self {
        Self(clamp(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Add a (possibly negative) delta, clamping to the domain.
    pub fn add(&mut self, delta: f64) {
        self.0 = clamp(self.0 + delta);
    }

    pub fn is_below(&self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Mood shown by the creature, derived from the current stats on every
/// render. Never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    #[default]
    Normal,
    Happy,
    Sad,
    Hungry,
    Sleeping,
}

/// One threshold check in an emotion rule list.
#[derive(Clone, Copy, Debug)]
enum MeterCheck {
    HungerBelow(f64),
    EnergyBelow(f64),
    HappinessAbove(f64),
    HappinessBelow(f64),
}

/// Priority-ordered emotion rules for the meters ruleset. First match wins:
/// need states (hunger, sleep) outrank mood states.
const METER_RULES: &[(MeterCheck, Emotion)] = &[
    (MeterCheck::HungerBelow(30.0), Emotion::Hungry),
    (MeterCheck::EnergyBelow(30.0), Emotion::Sleeping),
    (MeterCheck::HappinessAbove(80.0), Emotion::Happy),
    (MeterCheck::HappinessBelow(40.0), Emotion::Sad),
];

#[derive(Clone, Copy, Debug)]
enum HeartCheck {
    HungerAtMost(u8),
    HealthAtMost(u8),
    PoopAtLeast(u8),
    HungerAtLeast(u8),
}

const HEART_RULES: &[(HeartCheck, Emotion)] = &[
    (HeartCheck::HungerAtMost(1), Emotion::Hungry),
    (HeartCheck::HealthAtMost(1), Emotion::Sad),
    (HeartCheck::PoopAtLeast(2), Emotion::Sad),
    (HeartCheck::HungerAtLeast(4), Emotion::Happy),
];

/// Classify the pet's emotion from its vitals.
pub fn emotion_of(vitals: &Vitals) -> Emotion {
    match vitals {
        Vitals::Meters(m) => meter_emotion(m),
        Vitals::Hearts(h) => heart_emotion(h),
    }
}

fn meter_emotion(m: &MeterVitals) -> Emotion {
    for (check, emotion) in METER_RULES {
        let hit = match *check {
            MeterCheck::HungerBelow(t) => m.hunger.is_below(t),
            MeterCheck::EnergyBelow(t) => m.energy.is_below(t),
            MeterCheck::HappinessAbove(t) => m.happiness.value() > t,
            MeterCheck::HappinessBelow(t) => m.happiness.is_below(t),
        };
        if hit {
            return *emotion;
        }
    }
    Emotion::Normal
}

fn heart_emotion(h: &HeartVitals) -> Emotion {
    for (check, emotion) in HEART_RULES {
        let hit = match *check {
            HeartCheck::HungerAtMost(t) => h.hunger_hearts <= t,
            HeartCheck::HealthAtMost(t) => h.health_hearts <= t,
            HeartCheck::PoopAtLeast(t) => h.poop_count >= t,
            HeartCheck::HungerAtLeast(t) => h.hunger_hearts >= t,
        };
        if hit {
            return *emotion;
        }
    }
    Emotion::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters(hunger: f64, happiness: f64, energy: f64) -> Vitals {
        let mut m = MeterVitals::newborn();
        m.hunger = Meter::new(hunger);
        m.happiness = Meter::new(happiness);
        m.energy = Meter::new(energy);
        Vitals::Meters(m)
    }

    #[test]
    fn meter_clamps_both_ends() {
        let mut m = Meter::new(50.0);
        m.add(1000.0);
        assert_eq!(m.value(), 100.0);
        m.add(-1000.0);
        assert_eq!(m.value(), 0.0);
    }

    #[test]
    fn meter_rejects_nan() {
        assert_eq!(Meter::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn hunger_outranks_everything() {
        // Happy-worthy happiness, but starving
        assert_eq!(emotion_of(&meters(29.9, 95.0, 95.0)), Emotion::Hungry);
    }

    #[test]
    fn sleep_outranks_mood() {
        assert_eq!(emotion_of(&meters(50.0, 95.0, 29.9)), Emotion::Sleeping);
        assert_eq!(emotion_of(&meters(50.0, 10.0, 29.9)), Emotion::Sleeping);
    }

    #[test]
    fn mood_thresholds() {
        assert_eq!(emotion_of(&meters(50.0, 80.1, 50.0)), Emotion::Happy);
        assert_eq!(emotion_of(&meters(50.0, 39.9, 50.0)), Emotion::Sad);
        assert_eq!(emotion_of(&meters(50.0, 60.0, 50.0)), Emotion::Normal);
    }

    #[test]
    fn boundaries_are_exclusive() {
        // Exactly at a threshold never triggers the rule
        assert_eq!(emotion_of(&meters(30.0, 60.0, 50.0)), Emotion::Normal);
        assert_eq!(emotion_of(&meters(50.0, 80.0, 50.0)), Emotion::Normal);
        assert_eq!(emotion_of(&meters(50.0, 40.0, 50.0)), Emotion::Normal);
        assert_eq!(emotion_of(&meters(50.0, 60.0, 30.0)), Emotion::Normal);
    }

    #[test]
    fn heart_rules_in_priority_order() {
        let mut h = HeartVitals::newborn();
        h.hunger_hearts = 1;
        h.health_hearts = 0;
        // Hunger rule sits above health in the list
        assert_eq!(emotion_of(&Vitals::Hearts(h.clone())), Emotion::Hungry);

        h.hunger_hearts = 4;
        h.health_hearts = 4;
        h.poop_count = 2;
        assert_eq!(emotion_of(&Vitals::Hearts(h.clone())), Emotion::Sad);

        h.poop_count = 0;
        assert_eq!(emotion_of(&Vitals::Hearts(h)), Emotion::Happy);
    }
}
