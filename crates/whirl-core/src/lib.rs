pub mod config;
pub mod error;
pub mod scroller;

pub use config::{AppConfig, ScrollerConfig, UiConfig};
pub use error::{Error, Result};
pub use scroller::{AnimationClock, EasingType, Interpolator, ManualClock, MonotonicClock, Scroller};
