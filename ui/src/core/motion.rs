//! Declarative animation timing for the decorative elements.
//!
//! Keyframes live in `assets/theme/main.css`; this module only carries the
//! parameters (duration, delay, easing, repetition) and renders them to a CSS
//! `animation` shorthand so each instance can carry its own delay inline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Ease,
    EaseInOut,
    EaseOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
    /// Plays forwards then backwards, forever.
    ForeverReversing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub keyframes: &'static str,
    pub duration_s: f32,
    pub delay_s: f32,
    pub easing: Easing,
    pub repeat: Repeat,
}

/// Floating shapes drift up and down by 20px.
pub const FLOAT: Animation = Animation {
    keyframes: "float",
    duration_s: 5.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
};

/// Connecting lines draw themselves in, then retract.
pub const DRAW_LINE: Animation = Animation {
    keyframes: "draw-line",
    duration_s: 2.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::ForeverReversing,
};

pub const SLIDE_IN_LEFT: Animation = Animation {
    keyframes: "slide-in-left",
    duration_s: 0.5,
    delay_s: 0.0,
    easing: Easing::Ease,
    repeat: Repeat::Once,
};

pub const FADE_IN_UP: Animation = Animation {
    keyframes: "fade-in-up",
    duration_s: 0.8,
    delay_s: 0.0,
    easing: Easing::EaseOut,
    repeat: Repeat::Once,
};

pub const FADE_IN: Animation = Animation {
    keyframes: "fade-in",
    duration_s: 0.8,
    delay_s: 0.0,
    easing: Easing::Ease,
    repeat: Repeat::Once,
};

impl Animation {
    pub const fn delayed(self, delay_s: f32) -> Self {
        Self { delay_s, ..self }
    }

    pub const fn lasting(self, duration_s: f32) -> Self {
        Self { duration_s, ..self }
    }

    /// `animation: <name> <duration> <easing> <delay> <count> <direction> both;`
    pub fn css(&self) -> String {
        let (count, direction) = match self.repeat {
            Repeat::Once => ("1", "normal"),
            Repeat::Forever => ("infinite", "normal"),
            Repeat::ForeverReversing => ("infinite", "alternate"),
        };
        format!(
            "animation: {} {}s {} {}s {} {} both;",
            self.keyframes,
            trim_seconds(self.duration_s),
            self.easing.css(),
            trim_seconds(self.delay_s.max(0.0)),
            count,
            direction
        )
    }
}

fn trim_seconds(value: f32) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
