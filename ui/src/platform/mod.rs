//! Host bridges: the scroll listener and smooth-scroll lookup for each target.
//!
//! - wasm32 talks to the browser directly through `web-sys`.
//! - Native webviews (desktop/mobile) go through `document::eval`.
//!
//! Both are exported under the same names so views never `cfg` on the target.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{DocumentSections as PageSections, WindowScroll as PageScroll};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{EvalScroll as PageScroll, EvalSections as PageSections};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_test_host_is_not_web() {
        assert_ne!(Platform::current(), Platform::Web);
    }
}
