//! In-page anchors and the smooth-scroll seam.

/// Section ids rendered by the page. Navigation succeeds only for these.
pub mod anchors {
    pub const VISION: &str = "vision";
    pub const SERVICES: &str = "services";
    pub const SAKURA_TOKYO: &str = "sakura-tokyo";

    pub const ALL: [&str; 3] = [VISION, SERVICES, SAKURA_TOKYO];
}

/// What the host did with a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// The element was found and scrolled into view.
    Scrolled,
    /// No element carries that id; nothing happened.
    Missing,
    /// Handed to an asynchronous bridge that cannot report the lookup result.
    Dispatched,
}

/// Locates an in-page anchor by id and smooth-scrolls it into view.
pub trait SectionScroller {
    fn scroll_into_view(&self, section_id: &str) -> ScrollRequest;
}

/// A header entry: a display label and the anchor it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
}

impl NavigationItem {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn anchor_id(&self) -> String {
        anchor_id(self.label)
    }
}

/// Lowercase the label and hyphenate its first space (`SAKURA TOKYO` -> `sakura-tokyo`).
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}
