//! Platform-agnostic page logic: UI flags, scroll math, in-page navigation and animation timing.

pub mod motion;
pub mod navigation;
pub mod scroll;
pub mod state;
