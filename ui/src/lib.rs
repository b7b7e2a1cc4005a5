//! Shared UI crate for the Roman Inc. landing page. Every view, hook and
//! platform bridge lives here; the launcher crates only mount `LandingPage`.

pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod platform;
pub mod views;

pub mod components {
    pub mod decor;
    pub use decor::{ConnectingLines, FloatingShape};

    pub mod icons;

    mod service_card;
    pub use service_card::ServiceCard;

    // Header with section links, locale picker and the mobile menu (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;

    mod site_footer;
    pub use site_footer::SiteFooter;

    mod theme;
    pub use theme::Theme;
}
