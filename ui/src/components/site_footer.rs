use dioxus::prelude::*;

use crate::content::BRAND;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__brand text-gradient", "{BRAND}" }
                div { class: "site-footer__links",
                    a { class: "site-footer__link", href: "#", {t!("footer-privacy")} }
                    a { class: "site-footer__link", href: "#", {t!("footer-terms")} }
                }
            }
            div { class: "site-footer__copyright", {t!("footer-copyright")} }
        }
    }
}
