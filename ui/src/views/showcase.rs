use dioxus::prelude::*;

use crate::components::ConnectingLines;
use crate::content::{showcase_benefits, showcase_features};
use crate::core::motion::FADE_IN_UP;
use crate::core::navigation::anchors;
use crate::t;

/// SAKURA TOKYO, the in-house NFT × apparel product.
#[component]
pub fn Showcase() -> Element {
    let card_style = FADE_IN_UP.lasting(0.5).css();
    let features = showcase_features();
    let benefits = showcase_benefits();

    rsx! {
        section { id: anchors::SAKURA_TOKYO, class: "section showcase",
            ConnectingLines { gradient_id: "showcase-line-gradient" }
            div { class: "showcase__badge-row",
                span { class: "showcase__badge", {t!("showcase-badge")} }
            }
            h2 { class: "section__title showcase__title text-gradient--sakura", {t!("showcase-title")} }
            div { class: "showcase__inner",
                div { class: "showcase-card", style: "{card_style}",
                    h3 { class: "showcase-card__title text-gradient--sakura-soft", {t!("showcase-card-title")} }
                    p { class: "showcase-card__body", {t!("showcase-card-body")} }
                    div { class: "showcase-card__columns",
                        div {
                            h4 { class: "showcase-card__heading", {t!("showcase-features-title")} }
                            ul { class: "showcase-card__list",
                                for item in features {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                        div {
                            h4 { class: "showcase-card__heading", {t!("showcase-benefits-title")} }
                            ul { class: "showcase-card__list",
                                for item in benefits {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                    div { class: "showcase-card__actions",
                        button { r#type: "button", class: "button button--sakura button--lg",
                            {t!("showcase-cta")}
                        }
                    }
                }
            }
        }
    }
}
