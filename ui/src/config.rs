//! Tunables for the landing page.
//!
//! Launchers may provide a `LandingConfig` through Dioxus context; components
//! read it with [`use_landing_config`], which falls back to the defaults when
//! nothing was provided (e.g. when a section is rendered on its own).

use dioxus::prelude::*;

/// Vertical offset (px) past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll progress at which the hero backdrop has fully faded out.
pub const HERO_FADE_END: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingConfig {
    pub scroll_threshold: f64,
    pub hero_fade_end: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD,
            hero_fade_end: HERO_FADE_END,
        }
    }
}

pub fn use_landing_config() -> LandingConfig {
    try_use_context::<LandingConfig>().unwrap_or_default()
}
