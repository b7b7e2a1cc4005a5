//! Header/menu rules through the public core API: a scroll source feeding
//! `PageState`, and navigation through a `SectionScroller`. The mounted
//! `LandingPage` is covered by the crate's own lifecycle tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ui::config::{LandingConfig, SCROLL_THRESHOLD};
use ui::content::NAV_ITEMS;
use ui::core::navigation::{anchors, ScrollRequest, SectionScroller};
use ui::core::scroll::{hero_opacity, ScrollBus, ScrollSample, ScrollSource};
use ui::core::state::PageState;

/// Stand-in document holding the page's three sections.
struct FakeDocument {
    scrolled_to: RefCell<Vec<String>>,
}

impl FakeDocument {
    fn new() -> Self {
        Self {
            scrolled_to: RefCell::new(Vec::new()),
        }
    }
}

impl SectionScroller for FakeDocument {
    fn scroll_into_view(&self, section_id: &str) -> ScrollRequest {
        if anchors::ALL.contains(&section_id) {
            self.scrolled_to.borrow_mut().push(section_id.to_string());
            ScrollRequest::Scrolled
        } else {
            ScrollRequest::Missing
        }
    }
}

fn mount(bus: &ScrollBus, state: Rc<Cell<PageState>>, fade: Rc<Cell<f64>>) -> ui::core::scroll::ScrollGuard {
    let config = LandingConfig::default();
    bus.attach(Box::new(move |sample: ScrollSample| {
        let mut next = state.get();
        next.observe_scroll(sample.offset_y, config.scroll_threshold);
        state.set(next);
        fade.set(hero_opacity(sample.progress(), config.hero_fade_end));
    }))
    .expect("in-memory bus never fails")
}

#[test]
fn default_config_uses_fifty_pixel_threshold() {
    assert_eq!(LandingConfig::default().scroll_threshold, SCROLL_THRESHOLD);
    assert_eq!(SCROLL_THRESHOLD, 50.0);
}

#[test]
fn scroll_events_drive_header_flag_and_hero_fade() {
    let bus = ScrollBus::new();
    let state = Rc::new(Cell::new(PageState::default()));
    let fade = Rc::new(Cell::new(1.0));
    let _guard = mount(&bus, state.clone(), fade.clone());

    bus.emit(ScrollSample::new(50.0, 4000.0));
    assert!(!state.get().scrolled);
    assert!(fade.get() > 0.9);

    bus.emit(ScrollSample::new(51.0, 4000.0));
    assert!(state.get().scrolled);

    bus.emit(ScrollSample::new(800.0, 4000.0));
    assert_eq!(fade.get(), 0.0);

    bus.emit(ScrollSample::new(0.0, 4000.0));
    assert!(!state.get().scrolled);
    assert_eq!(fade.get(), 1.0);
}

#[test]
fn unmounting_stops_all_state_changes() {
    let bus = ScrollBus::new();
    let state = Rc::new(Cell::new(PageState::default()));
    let fade = Rc::new(Cell::new(1.0));
    let guard = mount(&bus, state.clone(), fade.clone());

    bus.emit(ScrollSample::new(300.0, 4000.0));
    let before = (state.get(), fade.get());
    assert!(before.0.scrolled);

    drop(guard);
    assert_eq!(bus.listener_count(), 0);

    bus.emit(ScrollSample::new(0.0, 4000.0));
    bus.emit(ScrollSample::new(10.0, 4000.0));
    assert_eq!((state.get(), fade.get()), before);
}

#[test]
fn remount_attaches_a_fresh_listener() {
    let bus = ScrollBus::new();
    let state = Rc::new(Cell::new(PageState::default()));
    let fade = Rc::new(Cell::new(1.0));

    let first = mount(&bus, state.clone(), fade.clone());
    first.detach();
    let _second = mount(&bus, state.clone(), fade.clone());
    assert_eq!(bus.listener_count(), 1);

    bus.emit(ScrollSample::new(120.0, 4000.0));
    assert!(state.get().scrolled);
}

#[test]
fn every_header_entry_reaches_its_section_and_closes_menu() {
    let doc = FakeDocument::new();
    let mut state = PageState::default();

    for item in NAV_ITEMS.iter() {
        state.toggle_menu();
        assert!(state.menu_open);
        assert_eq!(state.navigate_to(&item.anchor_id(), &doc), ScrollRequest::Scrolled);
        assert!(!state.menu_open);
    }

    assert_eq!(doc.scrolled_to.borrow().as_slice(), anchors::ALL);
}

#[test]
fn unknown_section_is_a_quiet_no_op_that_still_closes_menu() {
    let doc = FakeDocument::new();
    let mut state = PageState {
        scrolled: false,
        menu_open: true,
    };

    assert_eq!(state.navigate_to("contact", &doc), ScrollRequest::Missing);
    assert!(!state.menu_open);
    assert!(doc.scrolled_to.borrow().is_empty());
}

#[test]
fn toggle_sequence_alternates() {
    let mut state = PageState::default();
    let observed: Vec<bool> = (0..6)
        .map(|_| {
            state.toggle_menu();
            state.menu_open
        })
        .collect();
    assert_eq!(observed, [true, false, true, false, true, false]);
}
