use dioxus::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::content::{BRAND, NAV_ITEMS};
use crate::core::motion::SLIDE_IN_LEFT;
use crate::core::state::PageState;
use crate::hooks::{navigate, toggle_menu};
use crate::i18n;
use crate::t;

/// Fixed page header: brand, section links, locale picker and the mobile menu.
///
/// The bar turns translucent once the page scrolls past the configured
/// threshold (`PageState::scrolled`). On narrow viewports the links collapse
/// into a toggled panel; picking a link always closes it again.
#[component]
pub fn SiteHeader(state: Signal<PageState>) -> Element {
    let page = state();
    let brand_style = SLIDE_IN_LEFT.css();
    let toggle_label = if page.menu_open {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };

    rsx! {
        header { class: "{page.header_class()}",
            nav { class: "site-header__nav",
                div { class: "site-header__bar",
                    div { class: "site-header__brand text-gradient", style: "{brand_style}", "{BRAND}" }

                    NavLinks { state, class: "site-header__links" }

                    div { class: "site-header__tools",
                        LocaleSwitcher {}
                        button {
                            r#type: "button",
                            class: "site-header__toggle",
                            aria_label: "{toggle_label}",
                            aria_expanded: page.menu_open,
                            onclick: move |_| toggle_menu(state),
                            if page.menu_open {
                                CloseIcon {}
                            } else {
                                MenuIcon {}
                            }
                        }
                    }
                }
            }

            if page.menu_open {
                div { class: "site-header__mobile",
                    NavLinks { state, class: "site-header__mobile-links" }
                }
            }
        }
    }
}

#[component]
fn NavLinks(state: Signal<PageState>, class: &'static str) -> Element {
    rsx! {
        div { class: "{class}",
            { NAV_ITEMS.iter().map(|item| {
                let anchor = item.anchor_id();
                rsx! {
                    button {
                        key: "{item.label}",
                        r#type: "button",
                        class: "site-header__link",
                        onclick: move |_| {
                            navigate(state, &anchor);
                        },
                        "{item.label}"
                    }
                }
            })}
        }
    }
}

/// Locale picker; hidden when only one catalog is embedded.
#[component]
fn LocaleSwitcher() -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let locales = use_signal(i18n::available_locales);
    // Language code the launcher keys the page on, if it provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if locales.read().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| match i18n::set_language(&evt.value()) {
        Ok(locale) => {
            current_lang.set(locale.tag.to_string());
            if let Some(mut code) = lang_code_ctx {
                code.set(locale.tag.to_string());
            }
        }
        Err(err) => tracing::warn!("[i18n] {err}"),
    };

    rsx! {
        div { class: "site-header__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for locale in locales() {
                    option {
                        key: "{locale.tag}",
                        value: locale.tag,
                        selected: locale.tag == current_lang(),
                        "{locale.native_name}"
                    }
                }
            }
        }
    }
}
