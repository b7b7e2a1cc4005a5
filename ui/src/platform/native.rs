use dioxus::prelude::*;

use crate::core::navigation::{ScrollRequest, SectionScroller};
use crate::core::scroll::{ScrollGuard, ScrollHandler, ScrollSample, ScrollSource};
use crate::error::BridgeError;

// Streams samples until Rust sends anything back, then unhooks itself.
const SCROLL_BRIDGE_JS: &str = r#"
const report = () => dioxus.send({
    offset_y: window.scrollY,
    max_offset: document.documentElement.scrollHeight - window.innerHeight,
});
window.addEventListener("scroll", report, { passive: true });
await dioxus.recv();
window.removeEventListener("scroll", report);
"#;

/// Scroll listener installed in the webview through `document::eval`.
///
/// Must be attached from inside a Dioxus scope: the receive loop runs as a task.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalScroll;

impl ScrollSource for EvalScroll {
    fn attach(&self, mut handler: ScrollHandler) -> Result<ScrollGuard, BridgeError> {
        let bridge = document::eval(SCROLL_BRIDGE_JS);

        let mut receiver = bridge.clone();
        let task = spawn(async move {
            loop {
                match receiver.recv::<ScrollSample>().await {
                    Ok(sample) => handler(sample),
                    Err(err) => {
                        tracing::debug!("scroll bridge closed: {err}");
                        break;
                    }
                }
            }
        });

        Ok(ScrollGuard::new(move || {
            let _ = bridge.send("detach");
            task.cancel();
        }))
    }
}

/// Smooth-scrolls through the webview; the lookup result stays on the JS side.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalSections;

impl SectionScroller for EvalSections {
    fn scroll_into_view(&self, section_id: &str) -> ScrollRequest {
        let Ok(id) = serde_json::to_string(section_id) else {
            return ScrollRequest::Missing;
        };
        let _ = document::eval(&scroll_script(&id));
        ScrollRequest::Dispatched
    }
}

fn scroll_script(quoted_id: &str) -> String {
    format!(
        "const el = document.getElementById({quoted_id}); \
         if (el) {{ el.scrollIntoView({{ behavior: \"smooth\" }}); }}"
    )
}
