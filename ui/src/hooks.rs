//! Hooks binding [`PageState`] to the host page.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::{use_landing_config, LandingConfig};
use crate::core::navigation::ScrollRequest;
use crate::core::scroll::{hero_opacity, ScrollGuard, ScrollSample, ScrollSource};
use crate::core::state::PageState;
use crate::platform::{PageScroll, PageSections, Platform};

/// Scroll source the page listens to. Provide one as context to replace the
/// host window (headless renders, tests); otherwise [`PageScroll`] is used.
pub type SharedScrollSource = Rc<dyn ScrollSource>;

/// Keep `state.scrolled` and `hero_fade` in step with the window scroll position
/// for as long as the calling component is mounted.
///
/// The listener is installed after the first render and removed on unmount.
/// Signals are written only when a derived value changes.
pub fn use_scroll_observer(state: Signal<PageState>, hero_fade: Signal<f64>) {
    let config = use_landing_config();
    let provided = try_use_context::<SharedScrollSource>();
    let source: SharedScrollSource = use_hook(move || {
        provided.unwrap_or_else(|| Rc::new(PageScroll) as SharedScrollSource)
    });
    let guard: Rc<RefCell<Option<ScrollGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let guard = guard.clone();
        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            let handler = Box::new(move |sample: ScrollSample| {
                apply_sample(state, hero_fade, sample, config);
            });
            match source.attach(handler) {
                Ok(installed) => {
                    tracing::info!(platform = ?Platform::current(), "scroll observer attached");
                    guard.borrow_mut().replace(installed);
                }
                Err(err) => tracing::warn!("scroll observer unavailable: {err}"),
            }
        });
    }

    use_drop(move || {
        if let Some(installed) = guard.borrow_mut().take() {
            installed.detach();
            tracing::debug!("scroll observer detached");
        }
    });
}

/// Values a sample changes; `None` where the current value already holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollUpdate {
    pub state: Option<PageState>,
    pub fade: Option<f64>,
}

pub(crate) fn scroll_update(
    current: PageState,
    current_fade: f64,
    sample: ScrollSample,
    config: LandingConfig,
) -> ScrollUpdate {
    let mut next = current;
    let state = next
        .observe_scroll(sample.offset_y, config.scroll_threshold)
        .then_some(next);

    let opacity = hero_opacity(sample.progress(), config.hero_fade_end);
    let fade = (opacity != current_fade).then_some(opacity);

    ScrollUpdate { state, fade }
}

fn apply_sample(
    mut state: Signal<PageState>,
    mut hero_fade: Signal<f64>,
    sample: ScrollSample,
    config: LandingConfig,
) {
    let update = scroll_update(*state.peek(), *hero_fade.peek(), sample, config);
    if let Some(next) = update.state {
        state.set(next);
    }
    if let Some(opacity) = update.fade {
        hero_fade.set(opacity);
    }
}

/// Scroll to `section_id` and close the mobile menu. Missing sections are a silent no-op.
pub fn navigate(mut state: Signal<PageState>, section_id: &str) -> ScrollRequest {
    state.with_mut(|page| page.navigate_to(section_id, &PageSections))
}

pub fn toggle_menu(mut state: Signal<PageState>) {
    state.with_mut(PageState::toggle_menu);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: f64 = 4000.0;

    #[test]
    fn repeated_sample_changes_nothing() {
        let config = LandingConfig::default();
        let sample = ScrollSample::new(30.0, PAGE);
        let first = scroll_update(PageState::default(), 1.0, sample, config);
        assert_eq!(first.state, None);
        let fade = first.fade.expect("30px of 4000 dims the hero");

        let again = scroll_update(PageState::default(), fade, sample, config);
        assert_eq!(again, ScrollUpdate { state: None, fade: None });
    }

    #[test]
    fn crossing_the_threshold_updates_state_once() {
        let config = LandingConfig::default();
        let crossed = scroll_update(PageState::default(), 1.0, ScrollSample::new(80.0, PAGE), config);
        let next = crossed.state.expect("80px is past the threshold");
        assert!(next.scrolled);

        let deeper = scroll_update(next, 0.0, ScrollSample::new(2000.0, PAGE), config);
        assert_eq!(deeper, ScrollUpdate { state: None, fade: None });
    }

    #[test]
    fn menu_flag_survives_scroll_updates() {
        let config = LandingConfig::default();
        let open = PageState {
            scrolled: false,
            menu_open: true,
        };
        let update = scroll_update(open, 1.0, ScrollSample::new(120.0, PAGE), config);
        assert_eq!(
            update.state,
            Some(PageState {
                scrolled: true,
                menu_open: true
            })
        );
    }
}
