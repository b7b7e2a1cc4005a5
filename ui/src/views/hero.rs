use dioxus::prelude::*;

use crate::components::{ConnectingLines, FloatingShape};
use crate::core::motion::FADE_IN_UP;
use crate::core::navigation::anchors;
use crate::core::state::PageState;
use crate::hooks::navigate;
use crate::t;

/// Only this view subscribes to `fade`, so scroll-driven fading re-renders the hero alone.
#[component]
pub fn Hero(state: Signal<PageState>, fade: Signal<f64>) -> Element {
    let backdrop_style = format!("opacity: {:.3};", fade());
    let copy_style = FADE_IN_UP.css();

    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop", style: "{backdrop_style}",
                div { class: "hero__wash" }
                ConnectingLines { gradient_id: "hero-line-gradient" }
                FloatingShape { delay: 0.0 }
                FloatingShape { delay: 1.0 }
                FloatingShape { delay: 2.0 }
            }
            div { class: "hero__copy", style: "{copy_style}",
                h1 { class: "hero__title text-gradient", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                button {
                    r#type: "button",
                    class: "button button--primary button--lg",
                    onclick: move |_| {
                        navigate(state, anchors::VISION);
                    },
                    {t!("hero-cta")}
                }
            }
            div { class: "hero__fade-out" }
        }
    }
}
