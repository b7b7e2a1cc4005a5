//! Decorative, non-interactive background elements.

use dioxus::prelude::*;

use crate::core::motion::{DRAW_LINE, FLOAT};

/// A softly bobbing gradient tile. Position comes from the theme (`:nth-of-type`).
#[component]
pub fn FloatingShape(#[props(default)] delay: f32) -> Element {
    let style = FLOAT.delayed(delay).css();
    rsx! {
        div { class: "floating-shape", aria_hidden: "true", style: "{style}" }
    }
}

/// Two gradient strokes that draw in and retract across their container.
#[component]
pub fn ConnectingLines(#[props(into)] gradient_id: String) -> Element {
    let stroke = format!("url(#{gradient_id})");
    let first = DRAW_LINE.css();
    let second = DRAW_LINE.delayed(1.0).css();

    rsx! {
        svg {
            class: "connecting-lines",
            xmlns: "http://www.w3.org/2000/svg",
            "aria-hidden": "true",
            line {
                class: "connecting-lines__line",
                x1: "10%", y1: "30%", x2: "50%", y2: "70%",
                stroke: "{stroke}",
                stroke_width: "0.5",
                "pathLength": "1",
                style: "{first}",
            }
            line {
                class: "connecting-lines__line",
                x1: "90%", y1: "10%", x2: "50%", y2: "90%",
                stroke: "{stroke}",
                stroke_width: "0.5",
                "pathLength": "1",
                style: "{second}",
            }
            defs {
                linearGradient { id: "{gradient_id}", x1: "0%", y1: "0%", x2: "100%", y2: "100%",
                    stop { offset: "0%", stop_color: "#8B5CF6" }
                    stop { offset: "100%", stop_color: "#EC4899" }
                }
            }
        }
    }
}
