use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::core::navigation::{ScrollRequest, SectionScroller};
use crate::core::scroll::{ScrollGuard, ScrollHandler, ScrollSample, ScrollSource};
use crate::error::BridgeError;

const SCROLL_EVENT: &str = "scroll";

/// `scroll` listener on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn attach(&self, mut handler: ScrollHandler) -> Result<ScrollGuard, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;

        let target = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(sample(&target)));

        window
            .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|err| BridgeError::Listener {
                event: SCROLL_EVENT,
                reason: format!("{err:?}"),
            })?;

        Ok(ScrollGuard::new(move || {
            let _ = window.remove_event_listener_with_callback(
                SCROLL_EVENT,
                callback.as_ref().unchecked_ref(),
            );
            drop(callback);
        }))
    }
}

fn sample(window: &Window) -> ScrollSample {
    let offset_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    ScrollSample::new(offset_y, document_height - viewport)
}

/// Looks anchors up in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSections;

impl SectionScroller for DocumentSections {
    fn scroll_into_view(&self, section_id: &str) -> ScrollRequest {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section_id))
        else {
            return ScrollRequest::Missing;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        ScrollRequest::Scrolled
    }
}
