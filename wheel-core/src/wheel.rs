use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::collaborators::{Notifier, ParticleEffects, WheelRenderer};
use crate::config::WheelConfig;
use crate::error::ConfigError;
use crate::ledger::WinningsLedger;
use crate::outcome::RigQueue;
use crate::slices::{Sentiment, Slice, SliceSet};
use crate::spin::{SpinStateMachine, Tick};

/// Result of asking the wheel to spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRequest {
    /// A spin began; drive `tick` until it reports resolution.
    Started,
    /// A spin is already in flight; the request was dropped silently.
    AlreadySpinning,
    /// The budget is used up; the player has been notified.
    NoSpinsRemaining,
}

/// A finished spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub winning_index: usize,
    pub label: String,
    pub payout: Option<i64>,
    pub sentiment: Sentiment,
}

/// What a tick did, so the scheduler knows whether to re-arm.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    StillSpinning,
    Resolved(SpinOutcome),
}

/// The widget instance: owns the spin state machine, rig queue, ledger,
/// spin budget and RNG for one wheel, and talks to the presentation
/// layer only through the collaborator traits. Multiple independent
/// wheels can live side by side; nothing here is process-wide.
pub struct PrizeWheel<R, N, P> {
    slices: SliceSet,
    machine: SpinStateMachine,
    rig: RigQueue,
    ledger: WinningsLedger,
    spins_left: u32,
    rng: SmallRng,
    renderer: R,
    notifier: N,
    particles: P,
}

impl<R, N, P> PrizeWheel<R, N, P>
where
    R: WheelRenderer,
    N: Notifier,
    P: ParticleEffects,
{
    /// Builds a wheel or refuses outright: configuration problems are
    /// construction-time errors, never mid-spin surprises.
    pub fn new(
        config: WheelConfig,
        renderer: R,
        notifier: N,
        particles: P,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy(), renderer, notifier, particles)
    }

    /// Same as `new` with a caller-supplied RNG, for deterministic
    /// replays and tests.
    pub fn with_rng(
        config: WheelConfig,
        rng: SmallRng,
        renderer: R,
        notifier: N,
        particles: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let slices = config.slice_set()?;
        Ok(Self {
            machine: SpinStateMachine::new(
                slices.len(),
                config.spin_duration_ms,
                config.tick_interval_ms,
            ),
            rig: RigQueue::new(config.rig_sequence),
            ledger: WinningsLedger::new(),
            spins_left: config.max_spins,
            slices,
            rng,
            renderer,
            notifier,
            particles,
        })
    }

    pub fn spins_remaining(&self) -> u32 {
        self.spins_left
    }

    pub fn total_winnings(&self) -> i64 {
        self.ledger.total()
    }

    pub fn displayed_winnings(&self) -> i64 {
        self.ledger.displayed()
    }

    pub fn is_spinning(&self) -> bool {
        self.machine.is_spinning()
    }

    pub fn slices(&self) -> &[Slice] {
        self.slices.as_slice()
    }

    /// Single entry point for user interaction. Mid-spin requests are
    /// dropped without a word; an exhausted budget tells the player so.
    pub fn request_spin(&mut self) -> SpinRequest {
        if self.machine.is_spinning() {
            return SpinRequest::AlreadySpinning;
        }
        if self.spins_left == 0 {
            self.notifier.notify(
                "NO MORE SPINS!",
                "❌",
                "You have no more spins left!",
                Sentiment::Neutral,
            );
            return SpinRequest::NoSpinsRemaining;
        }

        self.spins_left -= 1;
        let plan = self.rig.select(&mut self.rng, &self.slices, self.machine.angle());
        let started = self.machine.begin(&plan);
        debug_assert!(started, "idle machine refused a spin");
        log::debug!(
            "spin started, {} left, rotating {:.2} rad",
            self.spins_left,
            plan.total_rotation
        );
        SpinRequest::Started
    }

    /// One animation step: paints the frame and, on the terminal tick,
    /// resolves the spin, books the payout and notifies the player.
    pub fn tick(&mut self) -> TickOutcome {
        match self.machine.tick() {
            Tick::Idle => TickOutcome::Idle,
            Tick::Frame { angle, highlighted } => {
                self.renderer.render(angle, self.slices.as_slice(), highlighted);
                TickOutcome::StillSpinning
            }
            Tick::Finished { angle, winning_index } => {
                self.renderer.render(angle, self.slices.as_slice(), winning_index);
                TickOutcome::Resolved(self.resolve(winning_index))
            }
        }
    }

    fn resolve(&mut self, winning_index: usize) -> SpinOutcome {
        let slice = self.slices.get(winning_index).clone();
        match slice.payout {
            Some(amount) if amount >= 0 => {
                self.notifier.notify(
                    "CONGRATS!",
                    "😃",
                    &format!("YOU WIN R{amount}"),
                    Sentiment::Positive,
                );
                self.particles.celebrate(true);
                self.ledger.apply_delta(amount);
            }
            Some(amount) => {
                self.notifier.notify(
                    "OOPS!",
                    "😞",
                    &format!("YOU LOST R{}", amount.abs()),
                    Sentiment::Negative,
                );
                self.particles.celebrate(false);
                self.ledger.apply_delta(amount);
            }
            // Informational wedge: nothing to pay, nothing to rain.
            None => {
                self.notifier.notify("RESULT", "😐", &slice.label, Sentiment::Neutral);
            }
        }
        SpinOutcome {
            winning_index,
            sentiment: slice.sentiment(),
            label: slice.label,
            payout: slice.payout,
        }
    }

    /// Advances the winnings count-up/down by one unit; `None` once the
    /// counter has settled on the booked total.
    pub fn step_ledger(&mut self) -> Option<i64> {
        self.ledger.step()
    }

    /// Repaints the wheel at rest (initial paint, window resize).
    pub fn render_now(&mut self) {
        self.renderer.render(
            self.machine.angle(),
            self.slices.as_slice(),
            self.machine.highlighted_index(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FrameLog(Rc<RefCell<usize>>);

    impl WheelRenderer for FrameLog {
        fn render(&mut self, _angle: f64, _slices: &[Slice], _highlighted: usize) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[derive(Clone, Default)]
    struct NoticeLog(Rc<RefCell<Vec<(String, String, Sentiment)>>>);

    impl Notifier for NoticeLog {
        fn notify(&mut self, header: &str, _icon: &str, message: &str, sentiment: Sentiment) {
            self.0
                .borrow_mut()
                .push((header.to_string(), message.to_string(), sentiment));
        }
    }

    #[derive(Clone, Default)]
    struct RainLog(Rc<RefCell<Vec<bool>>>);

    impl ParticleEffects for RainLog {
        fn celebrate(&mut self, is_win: bool) {
            self.0.borrow_mut().push(is_win);
        }
    }

    type TestWheel = PrizeWheel<FrameLog, NoticeLog, RainLog>;

    fn quick_config() -> WheelConfig {
        WheelConfig {
            spin_duration_ms: 300,
            tick_interval_ms: 30,
            ..WheelConfig::default()
        }
    }

    fn build(config: WheelConfig, seed: u64) -> (TestWheel, FrameLog, NoticeLog, RainLog) {
        let frames = FrameLog::default();
        let notices = NoticeLog::default();
        let rain = RainLog::default();
        let wheel = PrizeWheel::with_rng(
            config,
            SmallRng::seed_from_u64(seed),
            frames.clone(),
            notices.clone(),
            rain.clone(),
        )
        .unwrap();
        (wheel, frames, notices, rain)
    }

    fn spin_to_completion(wheel: &mut TestWheel) -> SpinOutcome {
        loop {
            match wheel.tick() {
                TickOutcome::Resolved(outcome) => return outcome,
                TickOutcome::StillSpinning => {}
                TickOutcome::Idle => panic!("wheel went idle without resolving"),
            }
        }
    }

    #[test]
    fn a_rigged_win_pays_out_and_celebrates() {
        let config = WheelConfig {
            slices: vec!["-50".into(), "100".into()],
            rig_sequence: vec!["100".into()],
            ..quick_config()
        };
        let (mut wheel, _, notices, rain) = build(config, 1);

        assert_eq!(wheel.request_spin(), SpinRequest::Started);
        assert!(wheel.is_spinning());
        let outcome = spin_to_completion(&mut wheel);

        assert_eq!(outcome.label, "100");
        assert_eq!(outcome.payout, Some(100));
        assert_eq!(outcome.sentiment, Sentiment::Positive);
        assert_eq!(wheel.total_winnings(), 100);
        assert_eq!(
            notices.0.borrow().last().unwrap(),
            &(
                "CONGRATS!".to_string(),
                "YOU WIN R100".to_string(),
                Sentiment::Positive
            )
        );
        assert_eq!(*rain.0.borrow(), vec![true]);

        // The counter ticks up in unit steps and settles exactly.
        let mut expected = 0;
        while let Some(value) = wheel.step_ledger() {
            expected += 1;
            assert_eq!(value, expected);
        }
        assert_eq!(wheel.displayed_winnings(), 100);
    }

    #[test]
    fn a_rigged_loss_counts_down() {
        let config = WheelConfig {
            rig_sequence: vec!["-500".into()],
            ..quick_config()
        };
        let (mut wheel, _, notices, rain) = build(config, 2);

        wheel.request_spin();
        let outcome = spin_to_completion(&mut wheel);

        assert_eq!(outcome.payout, Some(-500));
        assert_eq!(outcome.sentiment, Sentiment::Negative);
        assert_eq!(
            notices.0.borrow().last().unwrap(),
            &(
                "OOPS!".to_string(),
                "YOU LOST R500".to_string(),
                Sentiment::Negative
            )
        );
        assert_eq!(*rain.0.borrow(), vec![false]);

        while wheel.step_ledger().is_some() {}
        assert_eq!(wheel.displayed_winnings(), -500);
    }

    #[test]
    fn an_informational_wedge_pays_nothing() {
        let config = WheelConfig {
            rig_sequence: vec!["Zero".into()],
            ..quick_config()
        };
        let (mut wheel, _, notices, rain) = build(config, 3);

        wheel.request_spin();
        let outcome = spin_to_completion(&mut wheel);

        assert_eq!(outcome.payout, None);
        assert_eq!(outcome.sentiment, Sentiment::Neutral);
        assert_eq!(wheel.total_winnings(), 0);
        assert_eq!(wheel.step_ledger(), None);
        assert!(rain.0.borrow().is_empty());
        assert_eq!(
            notices.0.borrow().last().unwrap(),
            &("RESULT".to_string(), "Zero".to_string(), Sentiment::Neutral)
        );
    }

    #[test]
    fn the_default_rig_sequence_plays_out_in_order() {
        let (mut wheel, _, _, _) = build(quick_config(), 4);

        let mut labels = Vec::new();
        for _ in 0..3 {
            assert_eq!(wheel.request_spin(), SpinRequest::Started);
            labels.push(spin_to_completion(&mut wheel).label);
        }
        assert_eq!(labels, ["100", "-50", "250"]);
        assert_eq!(wheel.total_winnings(), 100 - 50 + 250);
        assert_eq!(wheel.spins_remaining(), 0);
    }

    #[test]
    fn requests_mid_spin_are_dropped() {
        let (mut wheel, _, _, _) = build(quick_config(), 5);

        assert_eq!(wheel.request_spin(), SpinRequest::Started);
        assert_eq!(wheel.spins_remaining(), 2);
        wheel.tick();
        assert_eq!(wheel.request_spin(), SpinRequest::AlreadySpinning);
        // The dropped request costs nothing and changes nothing.
        assert_eq!(wheel.spins_remaining(), 2);
        spin_to_completion(&mut wheel);
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn an_exhausted_budget_notifies_and_never_goes_negative() {
        let config = WheelConfig {
            max_spins: 1,
            ..quick_config()
        };
        let (mut wheel, frames, notices, _) = build(config, 6);

        wheel.request_spin();
        spin_to_completion(&mut wheel);
        assert_eq!(wheel.spins_remaining(), 0);

        let frames_before = *frames.0.borrow();
        assert_eq!(wheel.request_spin(), SpinRequest::NoSpinsRemaining);
        assert_eq!(wheel.spins_remaining(), 0);
        // Refusal paints nothing: no new rotation was issued.
        assert_eq!(*frames.0.borrow(), frames_before);
        assert_eq!(wheel.tick(), TickOutcome::Idle);
        assert_eq!(
            notices.0.borrow().last().unwrap(),
            &(
                "NO MORE SPINS!".to_string(),
                "You have no more spins left!".to_string(),
                Sentiment::Neutral
            )
        );
    }

    #[test]
    fn an_empty_slice_set_is_a_construction_error() {
        let config = WheelConfig {
            slices: Vec::new(),
            ..WheelConfig::default()
        };
        let result = PrizeWheel::new(
            config,
            FrameLog::default(),
            NoticeLog::default(),
            RainLog::default(),
        );
        assert!(matches!(result, Err(ConfigError::EmptySliceSet)));
    }

    #[test]
    fn an_unknown_rig_label_still_produces_a_valid_spin() {
        let config = WheelConfig {
            rig_sequence: vec!["no-such-wedge".into()],
            ..quick_config()
        };
        let (mut wheel, _, _, _) = build(config, 7);

        assert_eq!(wheel.request_spin(), SpinRequest::Started);
        let outcome = spin_to_completion(&mut wheel);
        assert!(outcome.winning_index < wheel.slices().len());
    }
}
