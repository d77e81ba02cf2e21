//! The scroll motion engine.
//!
//! Computes a one-dimensional scroll position over time in two regimes: a
//! fixed-duration eased scroll, and a velocity-driven fling decelerated by a
//! friction-derived constant. With friction set to 0 a fling never ends,
//! which is what makes continuously wrapping galleries possible. The physics
//! model is deliberately simple: constant deceleration always opposing the
//! current velocity, no boundary clamping, no overshoot.

use tracing::{debug, warn};

use super::clock::{AnimationClock, MonotonicClock};
use super::easing::{viscous_fluid, Interpolator};
use crate::config::ScrollerConfig;
use crate::error::{Error, Result};

/// Standard gravity, m/s².
pub const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter, used to convert gravity into pixel space.
pub const INCHES_PER_METER: f32 = 39.37;

/// The active motion and the parameters its update algorithm reads.
#[derive(Debug, Clone, Copy)]
enum Motion {
    Scroll {
        /// Total signed displacement to cover.
        delta: i32,
        duration_ms: f32,
        /// Cached 1/duration so the sampler avoids a division per tick.
        duration_reciprocal: f32,
    },
    Fling {
        /// Initial velocity in pixels/second, signed.
        velocity: f32,
        /// Deceleration magnitude in pixels/second², always >= 0.
        deceleration: f32,
        /// Infinite when deceleration is 0.
        duration_ms: f32,
    },
}

impl Motion {
    fn duration_ms(&self) -> f32 {
        match *self {
            Motion::Scroll { duration_ms, .. } | Motion::Fling { duration_ms, .. } => duration_ms,
        }
    }
}

/// One-axis scroller that happily goes on forever when friction is 0.
///
/// Drive it cooperatively: enter motion with [`start_scroll`] or [`fling`],
/// then call [`compute_scroll_offset`] once per animation tick and read the
/// position back with [`current_x`]. A single instance must not be driven
/// from more than one thread.
///
/// [`start_scroll`]: Scroller::start_scroll
/// [`fling`]: Scroller::fling
/// [`compute_scroll_offset`]: Scroller::compute_scroll_offset
/// [`current_x`]: Scroller::current_x
pub struct Scroller<C: AnimationClock = MonotonicClock> {
    clock: C,
    interpolator: Option<Box<dyn Interpolator>>,
    pixels_per_inch: f32,
    /// Deceleration read by the next fling; reconfigurable between motions.
    deceleration: f32,
    motion: Option<Motion>,
    start_time_ms: u64,
    start: i32,
    current: i32,
    finished: bool,
}

impl Scroller<MonotonicClock> {
    /// Create a scroller with the default monotonic clock.
    pub fn new(config: &ScrollerConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: AnimationClock> Scroller<C> {
    /// Create a scroller sampling time from `clock`.
    pub fn with_clock(config: &ScrollerConfig, clock: C) -> Self {
        let interpolator: Option<Box<dyn Interpolator>> = config
            .easing
            .map(|easing| Box::new(easing) as Box<dyn Interpolator>);
        let start_time_ms = clock.now_ms();
        Self {
            clock,
            interpolator,
            pixels_per_inch: config.pixels_per_inch,
            deceleration: compute_deceleration(config.pixels_per_inch, config.friction),
            motion: None,
            start_time_ms,
            start: 0,
            current: 0,
            finished: true,
        }
    }

    /// Replace the easing curve used by timed scrolls.
    ///
    /// `None` selects the built-in viscous fluid curve. Flings never use an
    /// easing curve; they integrate the kinematic equation directly.
    pub fn set_interpolator(&mut self, interpolator: Option<Box<dyn Interpolator>>) {
        self.interpolator = interpolator;
    }

    /// Set the friction used to decelerate flings.
    ///
    /// `friction` is a dimensionless coefficient, roughly in [0, 1]; 0 means
    /// frictionless, so flings run forever. Takes effect at the next
    /// [`fling`](Scroller::fling); a motion already in progress is unaffected.
    pub fn set_friction(&mut self, friction: f32) {
        self.deceleration = compute_deceleration(self.pixels_per_inch, friction);
    }

    /// Start scrolling by `delta_x` over a fixed `duration_ms`.
    ///
    /// Only the X axis is modeled; the Y parameters exist for interface
    /// parity with two-axis scrollers and are ignored.
    pub fn start_scroll(
        &mut self,
        start_x: i32,
        _start_y: i32,
        delta_x: i32,
        _delta_y: i32,
        duration_ms: u32,
    ) -> Result<()> {
        if duration_ms == 0 {
            return Err(Error::InvalidDuration(duration_ms));
        }

        let duration_ms = duration_ms as f32;
        self.motion = Some(Motion::Scroll {
            delta: delta_x,
            duration_ms,
            duration_reciprocal: 1.0 / duration_ms,
        });
        self.start = start_x;
        self.finished = false;
        self.start_time_ms = self.clock.now_ms();
        debug!(start_x, delta_x, duration_ms, "scroll started");
        Ok(())
    }

    /// Start a fling from `start_x` with `velocity_x` pixels/second.
    ///
    /// Same parameter list as conventional flinging scrollers, but only the
    /// X axis is used and the min/max bounds are *not* enforced — this
    /// scroller never clamps, so wrapping content can fling indefinitely.
    /// A zero velocity finishes immediately.
    #[allow(clippy::too_many_arguments)]
    pub fn fling(
        &mut self,
        start_x: i32,
        _start_y: i32,
        velocity_x: i32,
        _velocity_y: i32,
        _min_x: i32,
        _max_x: i32,
        _min_y: i32,
        _max_y: i32,
    ) {
        let velocity = velocity_x as f32;
        self.start = start_x;
        self.start_time_ms = self.clock.now_ms();
        self.finished = velocity_x == 0;

        let duration_ms = if velocity_x == 0 {
            0.0
        } else if self.deceleration == 0.0 {
            f32::INFINITY
        } else {
            // signum(-v) keeps the deceleration opposing the velocity, so
            // the derived duration is positive for either sign.
            -velocity / ((-velocity).signum() * self.deceleration) * 1000.0
        };

        self.motion = Some(Motion::Fling {
            velocity,
            deceleration: self.deceleration,
            duration_ms,
        });
        debug!(start_x, velocity_x, duration_ms, "fling started");
    }

    /// Advance the animation to the current clock reading.
    ///
    /// Call once per animation frame; read the result with
    /// [`current_x`](Scroller::current_x). Returns `true` while the motion is
    /// still active. Once finished, further calls are no-ops returning
    /// `false` and the position stays at its last computed value.
    pub fn compute_scroll_offset(&mut self) -> bool {
        if self.finished {
            return false;
        }
        let Some(motion) = self.motion else {
            self.finished = true;
            return false;
        };

        let elapsed_ms = self.clock.now_ms().saturating_sub(self.start_time_ms) as f32;
        if elapsed_ms >= motion.duration_ms() {
            self.finished = true;
            return false;
        }

        match motion {
            Motion::Scroll {
                delta,
                duration_reciprocal,
                ..
            } => {
                let t = elapsed_ms * duration_reciprocal;
                let eased = match &self.interpolator {
                    Some(interpolator) => interpolator.interpolate(t),
                    None => viscous_fluid(t),
                };
                self.current = self.start + (eased * delta as f32).round() as i32;
            }
            Motion::Fling {
                velocity,
                deceleration,
                ..
            } => {
                let t = elapsed_ms / 1000.0;
                let distance =
                    velocity * t + (-velocity).signum() * deceleration * t * t / 2.0;
                self.current = self.start + distance.round() as i32;
            }
        }

        true
    }

    /// Milliseconds elapsed since the current motion started.
    pub fn time_passed(&self) -> u32 {
        self.clock.now_ms().saturating_sub(self.start_time_ms) as u32
    }

    /// Current velocity in pixels/second.
    ///
    /// Only meaningful during a fling; during a timed scroll (or when idle)
    /// this returns 0. The deceleration term opposes the initial velocity,
    /// so the result decays toward zero as the fling runs down.
    pub fn current_velocity(&self) -> f32 {
        match self.motion {
            Some(Motion::Fling {
                velocity,
                deceleration,
                ..
            }) if !self.finished => {
                velocity + (-velocity).signum() * deceleration * self.time_passed() as f32 / 2000.0
            }
            _ => 0.0,
        }
    }

    /// Last position computed by [`compute_scroll_offset`](Scroller::compute_scroll_offset).
    pub fn current_x(&self) -> i32 {
        self.current
    }

    /// Computed length of the current motion in milliseconds.
    ///
    /// Returns `f32::INFINITY` for a frictionless fling, and 0 before any
    /// motion has been started.
    pub fn duration(&self) -> f32 {
        self.motion.map_or(0.0, |motion| motion.duration_ms())
    }

    /// True before any motion is started, and once a motion has run its
    /// course or been forced to stop.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Terminate the current motion immediately, leaving the position at its
    /// last computed value.
    ///
    /// Only `finished = true` is supported; un-finishing a scroller is not,
    /// and such calls are ignored.
    pub fn force_finished(&mut self, finished: bool) {
        if !finished {
            warn!("un-finishing a scroller is not supported; ignoring");
            return;
        }
        self.finished = true;
    }
}

/// Convert a dimensionless friction coefficient into a deceleration in
/// pixels/second², treating friction as a fraction of standard gravity
/// projected through the display density.
fn compute_deceleration(pixels_per_inch: f32, friction: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * pixels_per_inch * friction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroller::clock::ManualClock;
    use crate::scroller::easing::EasingType;

    fn config(friction: f32) -> ScrollerConfig {
        ScrollerConfig {
            friction,
            pixels_per_inch: 160.0,
            easing: None,
        }
    }

    fn scroller(friction: f32) -> (Scroller<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let scroller = Scroller::with_clock(&config(friction), clock.clone());
        (scroller, clock)
    }

    #[test]
    fn test_finished_before_any_motion() {
        let (mut scroller, _clock) = scroller(0.015);
        assert!(scroller.is_finished());
        assert!(!scroller.compute_scroll_offset());
        assert_eq!(scroller.current_x(), 0);
        assert_eq!(scroller.duration(), 0.0);
    }

    #[test]
    fn test_start_scroll_rejects_zero_duration() {
        let (mut scroller, _clock) = scroller(0.015);
        let err = scroller.start_scroll(0, 0, 100, 0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(0)));
        assert!(scroller.is_finished());
    }

    #[test]
    fn test_scroll_starts_at_start_position() {
        let (mut scroller, _clock) = scroller(0.015);
        scroller.start_scroll(0, 0, 100, 0, 1000).unwrap();
        assert!(!scroller.is_finished());
        assert!(scroller.compute_scroll_offset());
        assert_eq!(scroller.current_x(), 0);
    }

    #[test]
    fn test_scroll_position_monotonic_for_positive_delta() {
        let (mut scroller, clock) = scroller(0.015);
        scroller.start_scroll(0, 0, 100, 0, 1000).unwrap();
        let mut prev = scroller.current_x();
        for _ in 0..60 {
            clock.advance(16);
            if !scroller.compute_scroll_offset() {
                break;
            }
            let x = scroller.current_x();
            assert!(x >= prev, "position regressed: {prev} -> {x}");
            assert!(x <= 100);
            prev = x;
        }
        assert!(prev > 0);
    }

    #[test]
    fn test_scroll_finishes_after_duration() {
        let (mut scroller, clock) = scroller(0.015);
        scroller.start_scroll(0, 0, 100, 0, 1000).unwrap();
        clock.advance(500);
        assert!(scroller.compute_scroll_offset());
        let mid = scroller.current_x();
        assert!(mid > 0 && mid <= 100);

        clock.advance(600);
        assert!(!scroller.compute_scroll_offset());
        assert!(scroller.is_finished());
        // No final snap: position stays at the last computed sample.
        assert_eq!(scroller.current_x(), mid);
    }

    #[test]
    fn test_custom_interpolator_is_used() {
        let clock = ManualClock::new();
        let mut scroller = Scroller::with_clock(&config(0.015), clock.clone());
        scroller.set_interpolator(Some(Box::new(EasingType::Linear)));
        scroller.start_scroll(0, 0, 100, 0, 1000).unwrap();
        clock.advance(500);
        assert!(scroller.compute_scroll_offset());
        assert_eq!(scroller.current_x(), 50);
    }

    #[test]
    fn test_fling_duration_sign_symmetric() {
        let (mut scroller, _clock) = scroller(0.015);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        let forward = scroller.duration();
        scroller.fling(0, 0, -1000, 0, 0, 0, 0, 0);
        let backward = scroller.duration();
        assert!(forward > 0.0);
        assert!((forward - backward).abs() < 1e-3);

        let deceleration = GRAVITY_EARTH * INCHES_PER_METER * 160.0 * 0.015;
        let expected = 1000.0 / deceleration * 1000.0;
        assert!((forward - expected).abs() < 1.0);
    }

    #[test]
    fn test_fling_moves_in_velocity_direction() {
        let (mut scroller, clock) = scroller(0.015);
        scroller.fling(100, 0, -1000, 0, 0, 0, 0, 0);
        clock.advance(100);
        assert!(scroller.compute_scroll_offset());
        assert!(scroller.current_x() < 100);
    }

    #[test]
    fn test_frictionless_fling_never_finishes() {
        let (mut scroller, clock) = scroller(0.0);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        assert_eq!(scroller.duration(), f32::INFINITY);
        for _ in 0..1000 {
            clock.advance(1000);
            assert!(scroller.compute_scroll_offset());
        }
        assert!(!scroller.is_finished());
        // Position integrates linearly with no deceleration.
        assert_eq!(scroller.current_x(), 1_000_000);
    }

    #[test]
    fn test_zero_velocity_fling_finishes_immediately() {
        let (mut scroller, _clock) = scroller(0.015);
        scroller.fling(50, 0, 0, 0, 0, 0, 0, 0);
        assert!(scroller.is_finished());
        assert_eq!(scroller.duration(), 0.0);
        assert!(!scroller.compute_scroll_offset());
    }

    #[test]
    fn test_force_finished_is_idempotent() {
        let (mut scroller, clock) = scroller(0.0);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        clock.advance(500);
        assert!(scroller.compute_scroll_offset());
        let frozen = scroller.current_x();

        scroller.force_finished(true);
        for _ in 0..3 {
            clock.advance(100);
            assert!(!scroller.compute_scroll_offset());
            assert_eq!(scroller.current_x(), frozen);
        }
    }

    #[test]
    fn test_force_unfinish_is_ignored() {
        let (mut scroller, _clock) = scroller(0.0);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        scroller.force_finished(false);
        assert!(!scroller.is_finished());

        scroller.force_finished(true);
        scroller.force_finished(false);
        assert!(scroller.is_finished());
    }

    #[test]
    fn test_velocity_decays_toward_zero() {
        let (mut scroller, clock) = scroller(0.015);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        assert!((scroller.current_velocity() - 1000.0).abs() < 1e-3);

        let half = (scroller.duration() / 2.0) as u64;
        clock.advance(half);
        let v = scroller.current_velocity();
        assert!(v > 0.0 && v < 1000.0);
    }

    #[test]
    fn test_velocity_decay_symmetric_for_negative_velocity() {
        let (mut scroller, clock) = scroller(0.015);
        scroller.fling(0, 0, -1000, 0, 0, 0, 0, 0);
        assert!((scroller.current_velocity() + 1000.0).abs() < 1e-3);

        let half = (scroller.duration() / 2.0) as u64;
        clock.advance(half);
        let v = scroller.current_velocity();
        assert!(v < 0.0 && v > -1000.0);
    }

    #[test]
    fn test_set_friction_applies_to_next_fling() {
        let (mut scroller, _clock) = scroller(0.015);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        let before = scroller.duration();

        scroller.set_friction(0.03);
        // In-flight motion keeps its old deceleration.
        assert!((scroller.duration() - before).abs() < 1e-3);

        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        assert!((scroller.duration() - before / 2.0).abs() < 1.0);
    }

    #[test]
    fn test_position_stale_but_stable_without_sampling() {
        let (mut scroller, clock) = scroller(0.0);
        scroller.fling(0, 0, 1000, 0, 0, 0, 0, 0);
        clock.advance(1000);
        assert!(scroller.compute_scroll_offset());
        let sampled = scroller.current_x();
        clock.advance(5000);
        // Reading without sampling returns the last computed value.
        assert_eq!(scroller.current_x(), sampled);
    }
}
