use dioxus::prelude::*;

use crate::components::icons::ServiceGlyph;
use crate::content::ServiceCardEntry;

#[component]
pub fn ServiceCard(entry: ServiceCardEntry) -> Element {
    rsx! {
        div { class: "service-card",
            div { class: "service-card__icon",
                ServiceGlyph { icon: entry.icon }
            }
            h3 { class: "service-card__title", "{entry.title}" }
            p { class: "service-card__body", "{entry.description}" }
        }
    }
}
