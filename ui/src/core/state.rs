//! The two UI flags the page carries.

use super::navigation::{ScrollRequest, SectionScroller};

/// Header/menu state.
///
/// `scrolled` is written only by the scroll observer and `menu_open` only by
/// the menu toggle and by navigation (which always closes it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl PageState {
    /// Recompute `scrolled` from a vertical offset. Returns `true` when the flag flipped.
    pub fn observe_scroll(&mut self, offset_y: f64, threshold: f64) -> bool {
        let scrolled = offset_y > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Smooth-scroll to `section_id` (if the host finds it) and close the mobile menu.
    pub fn navigate_to<S>(&mut self, section_id: &str, scroller: &S) -> ScrollRequest
    where
        S: SectionScroller + ?Sized,
    {
        let request = scroller.scroll_into_view(section_id);
        self.menu_open = false;
        request
    }

    /// Modifier class for the header.
    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header site-header--scrolled"
        } else {
            "site-header"
        }
    }
}
