//! Action execution and tick pipeline.
//!
//! The [`PetEngine`] is the authoritative reducer for [`PetState`]. Every
//! mutation — user actions, periodic ticks, idle reconciliation at startup —
//! flows through it, so clamping, leveling, and achievement sweeps happen in
//! exactly one place. The engine itself holds no pet data, only the config
//! and the RNG oracle; callers own the state and the clock.

use chrono::{DateTime, Utc};

use crate::achievements;
use crate::action::{
    Action, ActionReceipt, ActionTransition, CleanAction, CodeAction, ExecuteError, FeedAction,
    PlayAction, SleepAction,
};
use crate::clock::{IdleReport, decay_meters, minutes_between, windows_crossed};
use crate::config::SimConfig;
use crate::env::{PcgRng, RngOracle, SimEnv, compute_seed, roll};
use crate::state::{JournalEntry, JournalLevel, PetState, Vitals};
use crate::view::{self, PetView};

/// Flavor table for the random bonus event: (message, XP).
const BONUS_TABLE: &[(&str, u64)] = &[
    ("Found a shiny bug!", 50),
    ("Feeling inspired!", 30),
    ("Great idea!", 40),
    ("Code looks beautiful!", 35),
];

/// Low-stat complaints, one per meter: (value getter context, text).
const WHINES: &[(u32, &str)] = &[
    (roll::WHINE_HUNGER, "I'm starving! Feed me!"),
    (roll::WHINE_HAPPINESS, "I'm so lonely... Play with me?"),
    (roll::WHINE_ENERGY, "So tired... Need sleep..."),
];

/// Result of submitting one user action.
#[derive(Clone, Debug)]
pub enum ActionOutcome {
    /// The precondition held; all effects were applied atomically. The
    /// entries were already appended to the journal.
    Applied { entries: Vec<JournalEntry> },
    /// The precondition failed; no stat moved. The complaint line (the
    /// rejection's `Display`) was appended to the journal.
    Rejected { reason: ExecuteError },
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

macro_rules! dispatch_action {
    ($action:expr, $state:expr, $env:expr, { $($variant:ident => $transition:expr),+ $(,)? }) => {{
        match $action {
            $(
                Action::$variant => drive(&$transition, $state, $env)
                    .map_err(ExecuteError::from),
            )+
        }
    }};
}

/// Pet engine: validates and applies actions, advances time, and derives
/// presentation facts.
pub struct PetEngine {
    config: SimConfig,
    rng: Box<dyn RngOracle>,
    session_seed: u64,
    /// Event sequence number; advances per executed action so repeated
    /// draws stay independent.
    nonce: u64,
}

impl PetEngine {
    pub fn new(config: SimConfig, session_seed: u64) -> Self {
        Self::with_rng(config, session_seed, Box::new(PcgRng))
    }

    /// Engine with a caller-supplied oracle; tests use this to pin draws.
    pub fn with_rng(config: SimConfig, session_seed: u64, rng: Box<dyn RngOracle>) -> Self {
        Self {
            config,
            rng,
            session_seed,
            nonce: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Produce the ready state at process start.
    ///
    /// Without a snapshot this is a fresh pet. With one, idle time is
    /// reconciled: decay for the wall-clock spent away is applied at the
    /// normal rates, clamped at the domain floor, with no XP, events, or
    /// achievements accruing. Reconciliation is a pure function of
    /// `(snapshot, now - last_seen_at)`.
    pub fn initialize(
        &self,
        snapshot: Option<PetState>,
        now: DateTime<Utc>,
    ) -> (PetState, Option<IdleReport>) {
        let Some(mut state) = snapshot else {
            let mut state = PetState::newborn(&self.config, now);
            state.journal.push(JournalEntry::new(
                now,
                JournalLevel::Info,
                format!("Say hello to {}!", state.name),
            ));
            return (state, None);
        };

        let minutes = minutes_between(state.last_seen_at, now);
        let mut report = IdleReport {
            away_minutes: minutes,
            ..IdleReport::default()
        };

        match &mut state.vitals {
            Vitals::Meters(m) => {
                let (hunger, happiness, energy) = decay_meters(m, minutes, &self.config);
                report.hunger_lost = hunger;
                report.happiness_lost = happiness;
                report.energy_lost = energy;
            }
            Vitals::Hearts(h) => {
                let hours = windows_crossed(
                    state.last_seen_at,
                    now,
                    self.config.hunger_heart_window_secs,
                )
                .count() as u64;
                let lost = (hours.min(u64::from(SimConfig::MAX_HEARTS))) as u8;
                report.hunger_hearts_lost = lost.min(h.hunger_hearts);
                h.lose_hunger(lost);
                h.session_age_hours = 0.0;
                h.lifetime_hours += minutes / 60.0;
            }
        }
        state.last_seen_at = now;

        state.journal.push(JournalEntry::new(
            now,
            JournalLevel::Info,
            format!("Welcome back! {} missed you!", state.name),
        ));
        if report.is_notable() {
            state.journal.push(JournalEntry::new(
                now,
                JournalLevel::Complaint,
                idle_summary(&report),
            ));
        }

        (state, Some(report))
    }

    /// Validate and apply one user action.
    pub fn execute(
        &mut self,
        state: &mut PetState,
        action: Action,
        now: DateTime<Utc>,
    ) -> ActionOutcome {
        self.nonce += 1;
        let env = SimEnv {
            config: &self.config,
            rng: self.rng.as_ref(),
            session_seed: self.session_seed,
            nonce: self.nonce,
        };

        let result = dispatch_action!(action, state, &env, {
            Feed => FeedAction,
            Play => PlayAction,
            Sleep => SleepAction,
            Code => CodeAction,
            Clean => CleanAction,
        });

        match result {
            Ok(receipt) => {
                let entries = self.settle_applied(state, receipt, now);
                ActionOutcome::Applied { entries }
            }
            Err(reason) => {
                state.journal.push(JournalEntry::new(
                    now,
                    JournalLevel::Complaint,
                    reason.to_string(),
                ));
                ActionOutcome::Rejected { reason }
            }
        }
    }

    /// Book the receipt of an applied action: journal lines, command
    /// counter, XP with level crossings, achievement sweep.
    fn settle_applied(
        &self,
        state: &mut PetState,
        receipt: ActionReceipt,
        now: DateTime<Utc>,
    ) -> Vec<JournalEntry> {
        let mut entries = vec![JournalEntry::new(now, receipt.level, receipt.line)];

        if let Some(m) = state.meters_mut() {
            m.commands += 1;

            if receipt.xp > 0 {
                entries.push(JournalEntry::new(
                    now,
                    JournalLevel::Reward,
                    format!("+{} XP", receipt.xp),
                ));
                let before = m.level;
                let gained = m.grant_xp(receipt.xp);
                push_level_ups(&mut entries, before, gained, now);
            }
        }

        sweep_achievements(state, &mut entries, now);

        for entry in &entries {
            state.journal.push(entry.clone());
        }
        entries
    }

    /// Advance simulated time to `now`.
    ///
    /// All rates are per minute and scaled by the real elapsed duration, so
    /// the host's tick interval never changes behavior. Periodic triggers
    /// (bonus events, poop, heart decay/regen, whines) fire once per
    /// fixed-length window boundary crossed since the previous tick.
    pub fn tick(&mut self, state: &mut PetState, now: DateTime<Utc>) -> Vec<JournalEntry> {
        let prev = state.last_seen_at;
        if now <= prev {
            return Vec::new();
        }
        let minutes = minutes_between(prev, now);
        let mut entries = Vec::new();

        match &mut state.vitals {
            Vitals::Meters(m) => {
                decay_meters(m, minutes, &self.config);

                for w in windows_crossed(prev, now, self.config.whine_window_secs) {
                    for (context, text) in WHINES {
                        let value = match *context {
                            roll::WHINE_HUNGER => m.hunger.value(),
                            roll::WHINE_HAPPINESS => m.happiness.value(),
                            _ => m.energy.value(),
                        };
                        let seed = compute_seed(self.session_seed, w as u64, *context);
                        if value < self.config.whine_threshold
                            && self.rng.chance(seed, self.config.whine_chance_percent)
                        {
                            entries.push(JournalEntry::new(now, JournalLevel::Complaint, *text));
                        }
                    }
                }

                for w in windows_crossed(prev, now, self.config.bonus_window_secs) {
                    // Only a rested, cheerful pet stumbles onto bonuses
                    if !(m.energy.value() > 50.0 && m.happiness.value() > 50.0) {
                        continue;
                    }
                    let chance_seed = compute_seed(self.session_seed, w as u64, roll::BONUS_CHANCE);
                    if !self.rng.chance(chance_seed, self.config.bonus_chance_percent) {
                        continue;
                    }
                    let pick_seed = compute_seed(self.session_seed, w as u64, roll::BONUS_PICK);
                    let (text, xp) = BONUS_TABLE[self.rng.index(pick_seed, BONUS_TABLE.len())];
                    entries.push(JournalEntry::new(
                        now,
                        JournalLevel::Reward,
                        format!("+{xp} XP - {text}"),
                    ));
                    let before = m.level;
                    let gained = m.grant_xp(xp);
                    push_level_ups(&mut entries, before, gained, now);
                }
            }
            Vitals::Hearts(h) => {
                h.session_age_hours += minutes / 60.0;
                h.lifetime_hours += minutes / 60.0;

                for _ in windows_crossed(prev, now, self.config.hunger_heart_window_secs) {
                    h.lose_hunger(1);
                }
                for _ in windows_crossed(prev, now, self.config.poop_window_secs) {
                    if h.hunger_hearts >= 3 && h.poop_count < SimConfig::MAX_POOP {
                        h.poop_count += 1;
                        entries.push(JournalEntry::new(
                            now,
                            JournalLevel::Complaint,
                            "...left a little surprise on the floor.",
                        ));
                    }
                }
                for _ in windows_crossed(prev, now, self.config.health_decay_window_secs) {
                    if h.hunger_hearts == 0 || h.poop_count >= 2 {
                        h.lose_health();
                    }
                }
                for _ in windows_crossed(prev, now, self.config.health_regen_window_secs) {
                    if h.hunger_hearts >= 3 && h.poop_count == 0 {
                        h.gain_health();
                    }
                }
            }
        }

        sweep_achievements(state, &mut entries, now);

        state.last_seen_at = now;
        for entry in &entries {
            state.journal.push(entry.clone());
        }
        entries
    }

    /// Presentation snapshot: stats plus every derived fact.
    pub fn view(&self, state: &PetState, now: DateTime<Utc>) -> PetView {
        view::build(
            &self.config,
            self.rng.as_ref(),
            self.session_seed,
            state,
            now,
        )
    }
}

fn push_level_ups(entries: &mut Vec<JournalEntry>, before: u32, gained: u32, now: DateTime<Utc>) {
    for i in 0..gained {
        entries.push(JournalEntry::new(
            now,
            JournalLevel::Reward,
            format!("LEVEL UP! Now level {}!", before + i + 1),
        ));
    }
}

fn sweep_achievements(state: &mut PetState, entries: &mut Vec<JournalEntry>, now: DateTime<Utc>) {
    for badge in achievements::sweep(&state.vitals, &mut state.achievements) {
        entries.push(JournalEntry::new(
            now,
            JournalLevel::Reward,
            format!("Achievement unlocked: {}!", badge.title()),
        ));
    }
}

fn idle_summary(report: &IdleReport) -> String {
    if report.hunger_hearts_lost > 0 {
        return format!(
            "Away for {:.0} min: lost {} hunger heart(s).",
            report.away_minutes, report.hunger_hearts_lost
        );
    }
    format!(
        "Away for {:.0} min: hunger -{:.0}, happiness -{:.0}, energy -{:.0}.",
        report.away_minutes, report.hunger_lost, report.happiness_lost, report.energy_lost
    )
}

#[inline]
fn drive<T>(
    transition: &T,
    state: &mut PetState,
    env: &SimEnv<'_>,
) -> Result<ActionReceipt, T::Error>
where
    T: ActionTransition,
{
    transition.pre_validate(state, env)?;
    Ok(transition.apply(state, env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ruleset;
    use crate::stats::Meter;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    /// Oracle answering every draw with one fixed value; ranges clamp it.
    struct StubRng(u32);

    impl RngOracle for StubRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }

        fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
            self.0.clamp(min, max)
        }
    }

    fn scenario_state(engine: &PetEngine) -> PetState {
        let mut state = PetState::newborn(engine.config(), at(0));
        let m = state.meters_mut().unwrap();
        m.hunger = Meter::new(40.0);
        m.happiness = Meter::new(35.0);
        m.energy = Meter::new(50.0);
        state
    }

    #[test]
    fn feed_play_code_sleep_scenario() {
        let mut engine =
            PetEngine::with_rng(SimConfig::default(), 0, Box::new(StubRng(350)));
        let mut state = scenario_state(&engine);

        assert!(engine.execute(&mut state, Action::Feed, at(1)).is_applied());
        {
            let m = state.meters().unwrap();
            assert_eq!(m.hunger.value(), 70.0);
            assert_eq!(m.xp, 10);
        }

        assert!(engine.execute(&mut state, Action::Play, at(2)).is_applied());
        {
            let m = state.meters().unwrap();
            assert_eq!(m.happiness.value(), 65.0);
            assert_eq!(m.energy.value(), 40.0);
            assert_eq!(m.xp, 25);
        }

        assert!(engine.execute(&mut state, Action::Code, at(3)).is_applied());
        {
            let m = state.meters().unwrap();
            assert_eq!(m.xp, 375);
            assert_eq!(m.happiness.value(), 85.0);
            assert_eq!(m.energy.value(), 25.0);
            assert_eq!(m.hunger.value(), 60.0);
            assert_eq!(m.commits, 1);
        }

        assert!(engine.execute(&mut state, Action::Sleep, at(4)).is_applied());
        {
            let m = state.meters().unwrap();
            assert_eq!(m.energy.value(), 65.0);
            assert_eq!(m.hunger.value(), 55.0);
            assert_eq!(m.xp, 383);
        }
    }

    #[test]
    fn rejection_leaves_state_untouched_except_journal() {
        let mut engine = PetEngine::new(SimConfig::default(), 7);
        let mut state = {
            let (state, _) = engine.initialize(None, at(0));
            state
        };
        state.meters_mut().unwrap().energy = Meter::new(5.0);

        let before = state.clone();
        let outcome = engine.execute(&mut state, Action::Play, at(10));

        assert!(matches!(
            outcome,
            ActionOutcome::Rejected {
                reason: ExecuteError::Play(crate::action::PlayError::TooTired)
            }
        ));
        assert_eq!(state.vitals, before.vitals);
        assert_eq!(state.achievements, before.achievements);
        assert_eq!(state.journal.len(), before.journal.len() + 1);
        let complaint = state.journal.recent(1).next().unwrap();
        assert_eq!(complaint.text, "Too tired to play... need sleep.");
        assert_eq!(complaint.level, JournalLevel::Complaint);
    }

    #[test]
    fn fresh_initialize_when_no_snapshot() {
        let engine = PetEngine::new(SimConfig::default(), 1);
        let (state, report) = engine.initialize(None, at(500));
        assert!(report.is_none());
        assert_eq!(state.name, "Lofty");
        assert_eq!(state.born_at, at(500));
        assert_eq!(state.journal.len(), 1);
    }

    #[test]
    fn idle_reconciliation_floors_at_zero() {
        let engine = PetEngine::new(SimConfig::default(), 1);
        let (mut state, _) = engine.initialize(None, at(0));
        state.journal = crate::state::Journal::new(8);

        // 600 idle minutes at 0.6/min from hunger 100 -> floor at 0
        state.last_seen_at = at(0);
        let (state, report) = engine.initialize(Some(state), at(600 * 60));
        let report = report.unwrap();

        let m = state.meters().unwrap();
        assert_eq!(m.hunger.value(), 0.0);
        assert_eq!(report.away_minutes, 600.0);
        assert_eq!(report.hunger_lost, 100.0);
        // No XP or achievements for idle decay
        assert_eq!(m.xp, 0);
        assert!(state.achievements.is_empty());
        assert_eq!(state.last_seen_at, at(600 * 60));
    }

    #[test]
    fn idle_reconciliation_is_deterministic() {
        let engine = PetEngine::new(SimConfig::default(), 1);
        let (mut base, _) = engine.initialize(None, at(0));
        base.meters_mut().unwrap().hunger = Meter::new(80.0);

        let (a, ra) = engine.initialize(Some(base.clone()), at(3_000));
        let (b, rb) = engine.initialize(Some(base), at(3_000));
        assert_eq!(a, b);
        assert_eq!(ra, rb);
    }

    #[test]
    fn tick_applies_per_minute_rates() {
        let mut engine = PetEngine::with_rng(SimConfig::default(), 0, Box::new(StubRng(99)));
        let (mut state, _) = engine.initialize(None, at(0));

        // One minute elapses; StubRng(99) never passes a chance roll
        engine.tick(&mut state, at(60));
        let m = state.meters().unwrap();
        assert_eq!(m.hunger.value(), 100.0 - 0.6);
        assert_eq!(m.happiness.value(), 100.0 - 0.48);
        assert_eq!(m.energy.value(), 100.0 - 0.3);
    }

    #[test]
    fn tick_ignores_backwards_clock() {
        let mut engine = PetEngine::new(SimConfig::default(), 0);
        let (mut state, _) = engine.initialize(None, at(1_000));
        let before = state.clone();
        assert!(engine.tick(&mut state, at(400)).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn bonus_event_fires_when_eligible() {
        // StubRng(0): every chance passes, every pick takes table entry 0
        let mut engine = PetEngine::with_rng(SimConfig::default(), 0, Box::new(StubRng(0)));
        let (mut state, _) = engine.initialize(None, at(0));

        let entries = engine.tick(&mut state, at(30));
        assert!(entries.iter().any(|e| e.text == "+50 XP - Found a shiny bug!"));
        assert_eq!(state.meters().unwrap().xp, 50);
    }

    #[test]
    fn bonus_event_requires_good_mood() {
        let mut engine = PetEngine::with_rng(SimConfig::default(), 0, Box::new(StubRng(0)));
        let (mut state, _) = engine.initialize(None, at(0));
        state.meters_mut().unwrap().happiness = Meter::new(50.0); // not > 50

        engine.tick(&mut state, at(30));
        assert_eq!(state.meters().unwrap().xp, 0);
    }

    #[test]
    fn hearts_tick_poops_when_well_fed() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let mut engine = PetEngine::with_rng(config, 0, Box::new(StubRng(99)));
        let (mut state, _) = engine.initialize(None, at(0));

        // Cross one 10-minute poop boundary
        engine.tick(&mut state, at(600));
        assert_eq!(state.hearts().unwrap().poop_count, 1);

        // Never beyond the cap
        engine.tick(&mut state, at(600 * 10));
        assert!(state.hearts().unwrap().poop_count <= SimConfig::MAX_POOP);
    }

    #[test]
    fn hearts_health_decays_when_starving() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let mut engine = PetEngine::with_rng(config, 0, Box::new(StubRng(99)));
        let (mut state, _) = engine.initialize(None, at(0));
        state.hearts_mut().unwrap().hunger_hearts = 0;

        // Two 60s health-decay boundaries
        engine.tick(&mut state, at(120));
        assert_eq!(state.hearts().unwrap().health_hearts, 2);
    }

    #[test]
    fn hearts_health_regenerates_slowly() {
        let config = SimConfig::with_ruleset(Ruleset::Hearts);
        let mut engine = PetEngine::with_rng(config, 0, Box::new(StubRng(99)));
        let (mut state, _) = engine.initialize(None, at(0));
        state.hearts_mut().unwrap().health_hearts = 1;

        // One regen boundary per 180s; well-fed and clean throughout.
        // Hunger hearts stay at 4 until the first hour boundary.
        engine.tick(&mut state, at(180));
        assert_eq!(state.hearts().unwrap().health_hearts, 2);
        engine.tick(&mut state, at(360));
        assert_eq!(state.hearts().unwrap().health_hearts, 3);
    }

    #[test]
    fn code_unlocks_first_commit() {
        let mut engine = PetEngine::with_rng(SimConfig::default(), 0, Box::new(StubRng(100)));
        let (mut state, _) = engine.initialize(None, at(0));

        engine.execute(&mut state, Action::Code, at(1));
        assert!(state.achievements.contains(&crate::Achievement::FirstCommit));
        // Feed/play/sleep/code all count as commands
        assert!(state.achievements.contains(&crate::Achievement::FirstMeal));
    }
}
