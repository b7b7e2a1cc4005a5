use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::core::state::PageState;
use crate::hooks::use_scroll_observer;

use super::{Hero, Services, Showcase, Vision};

/// The whole landing page: header, four sections and footer.
///
/// Owns the page state and the scroll observer; unmounting the page
/// detaches the observer.
#[component]
pub fn LandingPage() -> Element {
    let state = use_signal(PageState::default);
    let hero_fade = use_signal(|| 1.0_f64);
    use_scroll_observer(state, hero_fade);

    #[cfg(debug_assertions)]
    {
        tracing::debug!(lang = %crate::i18n::current_language(), "LandingPage render");
    }

    rsx! {
        div { class: "landing",
            SiteHeader { state }
            main { class: "landing__main",
                Hero { state, fade: hero_fade }
                Vision {}
                Services {}
                Showcase {}
            }
            SiteFooter {}
        }
    }
}
