//! Decorative page behaviours. None of them read or write query data.

pub mod header;
pub mod hero;
pub mod scroll;
pub mod tilt;

pub use header::persist_header_style;
pub use hero::{HeroAnimator, HeroHandle, MotionPreference, HERO_CLASS};
pub use scroll::{AnchorScroller, ScrollHost};
pub use tilt::{tilt_frame, TiltController, TiltFrame};
