use dioxus::prelude::*;

use crate::components::ConnectingLines;
use crate::core::motion::FADE_IN;
use crate::core::navigation::anchors;
use crate::t;

#[component]
pub fn Vision() -> Element {
    let first = FADE_IN.css();
    let second = FADE_IN.delayed(0.2).css();

    rsx! {
        section { id: anchors::VISION, class: "section vision",
            ConnectingLines { gradient_id: "vision-line-gradient" }
            div { class: "vision__inner",
                h2 { class: "section__title text-gradient", {t!("vision-title")} }
                p { class: "vision__body", style: "{first}", {t!("vision-body-1")} }
                p { class: "vision__body", style: "{second}", {t!("vision-body-2")} }
            }
        }
    }
}
