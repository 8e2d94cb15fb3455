//! Achievement table and the unlock sweep.
//!
//! Every predicate is monotone in the counter or level that drives it, so
//! sweeping twice over the same state can never change the unlocked set and
//! evaluation order does not matter.

use std::collections::BTreeSet;

use crate::state::{MeterVitals, Vitals};

/// Unlockable badges, persisted by identifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Achievement {
    FirstMeal,
    SocialButterfly,
    FirstCommit,
    Committed,
    GitMaster,
    BugSquasher,
    RisingStar,
    VeteranCoder,
    MasterDeveloper,
    Legendary,
}

impl Achievement {
    /// Display title shown in the client.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstMeal => "First Meal",
            Self::SocialButterfly => "Social Butterfly",
            Self::FirstCommit => "First Commit",
            Self::Committed => "Committed",
            Self::GitMaster => "Git Master",
            Self::BugSquasher => "Bug Squasher",
            Self::RisingStar => "Rising Star",
            Self::VeteranCoder => "Veteran Coder",
            Self::MasterDeveloper => "Master Developer",
            Self::Legendary => "LEGENDARY",
        }
    }
}

/// Which monotone counter a predicate watches.
#[derive(Clone, Copy, Debug)]
enum Driver {
    Commands,
    Commits,
    Level,
}

/// The fixed unlock table: (badge, driver, threshold).
const TABLE: &[(Achievement, Driver, u64)] = &[
    (Achievement::FirstMeal, Driver::Commands, 1),
    (Achievement::SocialButterfly, Driver::Commands, 25),
    (Achievement::FirstCommit, Driver::Commits, 1),
    (Achievement::Committed, Driver::Commits, 10),
    (Achievement::GitMaster, Driver::Commits, 50),
    (Achievement::BugSquasher, Driver::Commits, 100),
    (Achievement::RisingStar, Driver::Level, 10),
    (Achievement::VeteranCoder, Driver::Level, 25),
    (Achievement::MasterDeveloper, Driver::Level, 50),
    (Achievement::Legendary, Driver::Level, 100),
];

/// Evaluate the table against the current vitals and add any newly earned
/// badges. Returns the fresh unlocks, in table order, for journaling.
///
/// Hearts pets track no counters, so the sweep is a no-op for them.
pub fn sweep(vitals: &Vitals, unlocked: &mut BTreeSet<Achievement>) -> Vec<Achievement> {
    let Vitals::Meters(m) = vitals else {
        return Vec::new();
    };

    let mut fresh = Vec::new();
    for (badge, driver, threshold) in TABLE {
        if driver_value(m, *driver) >= *threshold && unlocked.insert(*badge) {
            fresh.push(*badge);
        }
    }
    fresh
}

fn driver_value(m: &MeterVitals, driver: Driver) -> u64 {
    match driver {
        Driver::Commands => m.commands,
        Driver::Commits => m.commits,
        Driver::Level => u64::from(m.level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HeartVitals;

    #[test]
    fn thresholds_unlock_once() {
        let mut m = MeterVitals::newborn();
        m.commits = 10;
        m.commands = 1;
        let vitals = Vitals::Meters(m);

        let mut unlocked = BTreeSet::new();
        let fresh = sweep(&vitals, &mut unlocked);
        assert_eq!(
            fresh,
            vec![
                Achievement::FirstMeal,
                Achievement::FirstCommit,
                Achievement::Committed,
            ]
        );

        // Second sweep on the same state changes nothing
        let before = unlocked.clone();
        assert!(sweep(&vitals, &mut unlocked).is_empty());
        assert_eq!(unlocked, before);
    }

    #[test]
    fn level_milestones() {
        let mut m = MeterVitals::newborn();
        m.level = 50;
        let mut unlocked = BTreeSet::new();
        let fresh = sweep(&Vitals::Meters(m), &mut unlocked);
        assert!(fresh.contains(&Achievement::RisingStar));
        assert!(fresh.contains(&Achievement::VeteranCoder));
        assert!(fresh.contains(&Achievement::MasterDeveloper));
        assert!(!fresh.contains(&Achievement::Legendary));
    }

    #[test]
    fn hearts_pets_have_no_badges() {
        let mut unlocked = BTreeSet::new();
        assert!(sweep(&Vitals::Hearts(HeartVitals::newborn()), &mut unlocked).is_empty());
    }

    #[test]
    fn identifiers_round_trip_as_snake_case() {
        assert_eq!(Achievement::GitMaster.to_string(), "git_master");
        assert_eq!(
            "git_master".parse::<Achievement>().unwrap(),
            Achievement::GitMaster
        );
    }
}
