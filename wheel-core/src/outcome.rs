use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_angle, slice_arc};
use crate::slices::SliceSet;

/// How far the wheel must turn for one spin, and where it is guaranteed
/// to land if the outcome was forced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Total rotation delta in radians, full turns included.
    pub total_rotation: f64,
    /// Forced winner, if this spin was rigged onto a known slice. Random
    /// spins leave this empty on purpose: their winner is derived from
    /// the final angle at resolution, through the same formula as the
    /// live highlight, so the visual landing can never disagree with the
    /// announced result.
    pub target: Option<usize>,
}

/// Forced outcomes for the first spins, consumed strictly in order.
/// Once exhausted, every spin is uniformly random. The consumed counter
/// only ever moves forward; an invalid label still burns its entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RigQueue {
    labels: Vec<String>,
    consumed: usize,
}

impl RigQueue {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, consumed: 0 }
    }

    /// How many rigged spins have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.consumed >= self.labels.len()
    }

    /// Decides the next spin: a forced outcome while the queue lasts,
    /// uniformly random afterwards. Also draws the full-turn count
    /// (4 to 6 complete revolutions) that makes the animation read as a
    /// real spin rather than a short nudge.
    pub fn select(&mut self, rng: &mut impl Rng, slices: &SliceSet, start_angle: f64) -> SpinPlan {
        let turns = f64::from(rng.gen_range(4..=6u32)) * 2.0 * PI;

        if let Some(label) = self.take_next_label() {
            match slices.position_of_label(&label) {
                Some(index) => {
                    return SpinPlan {
                        total_rotation: turns + Self::alignment(start_angle, index, slices.len()),
                        target: Some(index),
                    };
                }
                None => {
                    // Documented fallback: an unknown rigged label
                    // degrades to a fully random spin instead of failing.
                    log::warn!("rigged label {label:?} is not on the wheel, spinning random instead");
                }
            }
        }

        SpinPlan {
            total_rotation: turns + rng.gen_range(0.0..2.0 * PI),
            target: None,
        }
    }

    fn take_next_label(&mut self) -> Option<String> {
        let label = self.labels.get(self.consumed).cloned()?;
        self.consumed += 1;
        Some(label)
    }

    /// Fractional angle that, added to `start_angle`, parks the middle of
    /// slice `index` under the top pointer.
    fn alignment(start_angle: f64, index: usize, count: usize) -> f64 {
        let arc = slice_arc(count);
        let desired = normalize_angle((count - index) as f64 * arc - arc / 2.0);
        let current = normalize_angle(start_angle + PI / 2.0);
        normalize_angle(desired - current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::slice_index_at_angle;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ten_slices() -> SliceSet {
        SliceSet::from_labels(&[
            "-50", "100", "-100", "200", "-200", "250", "-300", "1000", "-500", "Zero",
        ])
        .unwrap()
    }

    #[test]
    fn rigged_spins_land_on_their_label_from_any_start_angle() {
        let slices = ten_slices();
        let mut rng = SmallRng::seed_from_u64(7);
        for step in 0..60 {
            let start_angle = step as f64 * 0.37 - 9.0;
            for label in ["-50", "100", "1000", "Zero"] {
                let mut rig = RigQueue::new(vec![label.to_string()]);
                let plan = rig.select(&mut rng, &slices, start_angle);
                let final_angle = normalize_angle(start_angle + plan.total_rotation);
                let index = slice_index_at_angle(final_angle, slices.len());
                assert_eq!(slices.get(index).label, label, "start angle {start_angle}");
                assert_eq!(plan.target, Some(index));
            }
        }
    }

    #[test]
    fn every_plan_carries_four_to_six_full_turns() {
        let slices = ten_slices();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut rig = RigQueue::new(vec!["100".into(), "nope".into()]);
        for _ in 0..200 {
            let plan = rig.select(&mut rng, &slices, 1.5);
            assert!(plan.total_rotation >= 4.0 * 2.0 * PI);
            assert!(plan.total_rotation < 7.0 * 2.0 * PI);
        }
    }

    #[test]
    fn unknown_rig_label_falls_back_to_random_but_still_burns_the_entry() {
        let slices = ten_slices();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut rig = RigQueue::new(vec!["9999".into()]);
        let plan = rig.select(&mut rng, &slices, 0.0);
        assert_eq!(plan.target, None);
        assert_eq!(rig.consumed(), 1);
        assert!(rig.is_exhausted());
    }

    #[test]
    fn the_queue_is_consumed_strictly_in_order() {
        let slices = ten_slices();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut rig = RigQueue::new(vec!["100".into(), "-50".into(), "250".into()]);

        let expected = [1usize, 0, 5];
        for (spin, index) in expected.into_iter().enumerate() {
            let plan = rig.select(&mut rng, &slices, 0.0);
            assert_eq!(plan.target, Some(index));
            assert_eq!(rig.consumed(), spin + 1);
        }
        assert!(rig.is_exhausted());
        assert_eq!(rig.select(&mut rng, &slices, 0.0).target, None);
    }

    #[test]
    fn exhausted_queue_spins_roughly_uniformly() {
        let slices = ten_slices();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut rig = RigQueue::new(Vec::new());
        let mut counts = [0usize; 10];
        let mut angle = 0.0;
        for _ in 0..10_000 {
            let plan = rig.select(&mut rng, &slices, angle);
            angle = normalize_angle(angle + plan.total_rotation);
            counts[slice_index_at_angle(angle, slices.len())] += 1;
        }
        // Expected 1000 per slice; anything wildly off means the random
        // fractional turn is biased.
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                (800..1200).contains(&count),
                "slice {index} hit {count} times: {counts:?}"
            );
        }
    }
}
