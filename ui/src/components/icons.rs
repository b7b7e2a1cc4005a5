//! Inline stroke icons (Lucide geometry) for the header toggle and service cards.

use dioxus::prelude::*;

use crate::content::ServiceIcon;

#[component]
fn StrokeIcon(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ServiceGlyph(icon: ServiceIcon, #[props(default = "icon".to_string())] class: String) -> Element {
    match icon {
        ServiceIcon::Users => rsx! {
            StrokeIcon { class,
                path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                circle { cx: "9", cy: "7", r: "4" }
                path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
            }
        },
        ServiceIcon::PenTool => rsx! {
            StrokeIcon { class,
                path { d: "m12 19 7-7 3 3-7 7-3-3z" }
                path { d: "m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" }
                path { d: "m2 2 7.586 7.586" }
                circle { cx: "11", cy: "11", r: "2" }
            }
        },
        ServiceIcon::Cpu => rsx! {
            StrokeIcon { class,
                rect { x: "4", y: "4", width: "16", height: "16", rx: "2" }
                rect { x: "9", y: "9", width: "6", height: "6" }
                path { d: "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" }
            }
        },
        ServiceIcon::Lightbulb => rsx! {
            StrokeIcon { class,
                path { d: "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5" }
                path { d: "M9 18h6" }
                path { d: "M10 22h4" }
            }
        },
    }
}
