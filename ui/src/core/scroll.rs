//! Scroll sampling and the listener lifecycle.
//!
//! A [`ScrollSource`] installs a page-wide scroll listener and hands back a
//! [`ScrollGuard`]. The listener lives exactly as long as the guard: dropping
//! it (or calling [`ScrollGuard::detach`]) removes the listener, so a page
//! that unmounts leaves nothing behind on the host window.
//!
//! Platform sources live in `crate::platform`; [`ScrollBus`] is an in-memory
//! source for headless renderers and tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Deserialize;

use crate::error::BridgeError;

/// One reading of the window's vertical scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ScrollSample {
    /// Current vertical offset (px).
    pub offset_y: f64,
    /// Largest reachable offset: document height minus viewport height.
    pub max_offset: f64,
}

impl ScrollSample {
    pub fn new(offset_y: f64, max_offset: f64) -> Self {
        Self {
            offset_y,
            max_offset,
        }
    }

    /// Scroll progress in `[0, 1]`; `0` when the page cannot scroll.
    pub fn progress(&self) -> f64 {
        if self.max_offset.is_nan() || self.max_offset <= 0.0 || !self.offset_y.is_finite() {
            return 0.0;
        }
        (self.offset_y / self.max_offset).clamp(0.0, 1.0)
    }
}

/// Hero backdrop opacity: fades linearly from 1 at the top to 0 at `fade_end` progress.
pub fn hero_opacity(progress: f64, fade_end: f64) -> f64 {
    if fade_end.is_nan() || fade_end <= 0.0 {
        return if progress > 0.0 { 0.0 } else { 1.0 };
    }
    (1.0 - progress / fade_end).clamp(0.0, 1.0)
}

pub type ScrollHandler = Box<dyn FnMut(ScrollSample)>;

/// Something that can report window scroll events.
pub trait ScrollSource {
    fn attach(&self, handler: ScrollHandler) -> Result<ScrollGuard, BridgeError>;
}

/// Keeps a scroll listener installed; removes it on drop.
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ScrollGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollGuard {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollGuard")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[derive(Default)]
struct BusListeners {
    next_id: u64,
    handlers: Vec<(u64, ScrollHandler)>,
}

/// In-memory scroll source: samples are pushed with [`ScrollBus::emit`].
///
/// Handlers must not attach or detach listeners on the same bus while they run.
#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Rc<RefCell<BusListeners>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a sample to every attached listener, in attach order.
    pub fn emit(&self, sample: ScrollSample) {
        let mut inner = self.inner.borrow_mut();
        for (_, handler) in inner.handlers.iter_mut() {
            handler(sample);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl ScrollSource for ScrollBus {
    fn attach(&self, handler: ScrollHandler) -> Result<ScrollGuard, BridgeError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<BusListeners>> = Rc::downgrade(&self.inner);
        Ok(ScrollGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
            }
        }))
    }
}

impl std::fmt::Debug for ScrollBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
