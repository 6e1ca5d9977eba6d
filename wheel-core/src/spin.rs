use crate::geometry::{ease_out_expo, normalize_angle, slice_index_at_angle};
use crate::outcome::SpinPlan;

/// Transient state for the one spin allowed in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SpinSession {
    start_angle: f64,
    total_rotation: f64,
    elapsed_ms: u32,
}

/// What one animation step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Nothing in flight; ticking an idle wheel is a no-op.
    Idle,
    /// Mid-spin frame: the wheel angle and the slice under the pointer.
    Frame { angle: f64, highlighted: usize },
    /// The spin just finished, landed on this exact normalized angle.
    Finished { angle: f64, winning_index: usize },
}

/// Advances the wheel angle through a spin, one fixed-size step per call.
///
/// The machine is deliberately scheduler-agnostic: it has no timers of
/// its own, it just credits `tick_interval_ms` of animation per `tick`,
/// so it can be driven by a browser timeout chain, an animation-frame
/// callback, or a bare test loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinStateMachine {
    angle: f64,
    session: Option<SpinSession>,
    slice_count: usize,
    duration_ms: u32,
    tick_interval_ms: u32,
}

impl SpinStateMachine {
    pub fn new(slice_count: usize, duration_ms: u32, tick_interval_ms: u32) -> Self {
        Self {
            angle: 0.0,
            session: None,
            slice_count,
            duration_ms,
            tick_interval_ms,
        }
    }

    /// Current cumulative rotation. Normalized to [0, 2π) whenever the
    /// wheel is at rest.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Slice currently under the pointer, for painting the idle wheel.
    pub fn highlighted_index(&self) -> usize {
        slice_index_at_angle(self.angle, self.slice_count)
    }

    /// Starts a spin toward the planned rotation. Returns false while a
    /// spin is in flight: requests mid-spin are dropped, never queued.
    pub fn begin(&mut self, plan: &SpinPlan) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(SpinSession {
            start_angle: self.angle,
            total_rotation: plan.total_rotation,
            elapsed_ms: 0,
        });
        true
    }

    /// One animation step. Total: every call yields a valid next state,
    /// so the animation cannot get stuck or panic mid-chain.
    pub fn tick(&mut self) -> Tick {
        let Some(mut session) = self.session else {
            return Tick::Idle;
        };
        session.elapsed_ms += self.tick_interval_ms;

        if session.elapsed_ms >= self.duration_ms {
            // Land on the exact planned angle, not the eased
            // approximation, so tick-timing jitter cannot move the
            // winner.
            let angle = normalize_angle(session.start_angle + session.total_rotation);
            self.angle = angle;
            self.session = None;
            return Tick::Finished {
                angle,
                winning_index: slice_index_at_angle(angle, self.slice_count),
            };
        }

        let t = f64::from(session.elapsed_ms) / f64::from(self.duration_ms);
        self.angle = session.start_angle + ease_out_expo(t) * session.total_rotation;
        self.session = Some(session);
        Tick::Frame {
            angle: self.angle,
            highlighted: self.highlighted_index(),
        }
    }
}
