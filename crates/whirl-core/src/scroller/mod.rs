//! Infinite scroll motion engine.
//!
//! A one-dimensional scroller with two motion regimes: fixed-duration eased
//! scrolls and velocity-driven flings. Unlike conventional scrollers it never
//! clamps to a content range, and with friction set to 0 a fling continues
//! indefinitely — the building block for continuously wrapping galleries.
//!
//! - `clock` - animation time sources (monotonic and manually driven)
//! - `easing` - interpolation curves, including the built-in viscous fluid
//! - `engine` - the scroller state machine and kinematics
//!
//! # Usage
//!
//! ```ignore
//! use whirl_core::{Scroller, ScrollerConfig};
//!
//! let mut scroller = Scroller::new(&ScrollerConfig::default());
//!
//! // Eased scroll: 240 px to the right over 450 ms.
//! scroller.start_scroll(0, 0, 240, 0, 450)?;
//!
//! // In the render loop, once per tick:
//! while scroller.compute_scroll_offset() {
//!     draw_at(scroller.current_x());
//! }
//! ```

pub mod clock;
pub mod easing;
pub mod engine;

pub use clock::{AnimationClock, ManualClock, MonotonicClock};
pub use easing::{viscous_fluid, EasingType, Interpolator};
pub use engine::{Scroller, GRAVITY_EARTH, INCHES_PER_METER};
