use dioxus::prelude::*;

use crate::components::ServiceCard;
use crate::content::service_entries;
use crate::core::navigation::anchors;
use crate::t;

#[component]
pub fn Services() -> Element {
    let entries = service_entries();

    rsx! {
        section { id: anchors::SERVICES, class: "section services",
            div { class: "services__inner",
                h2 { class: "section__title text-gradient", {t!("services-title")} }
                p { class: "services__subtitle", {t!("services-subtitle")} }
                div { class: "services__grid",
                    for entry in entries.iter() {
                        ServiceCard { key: "{entry.title}", entry: entry.clone() }
                    }
                }
                div { class: "services__actions",
                    button { r#type: "button", class: "button button--outline button--lg",
                        {t!("services-cta")}
                    }
                }
            }
        }
    }
}
