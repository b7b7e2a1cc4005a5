#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::prelude::*;

use ui::config::LandingConfig;
use ui::i18n;
use ui::views::LandingPage;

/// The shared theme, compiled into the binary so packaged builds need no asset folder.
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop().with_cfg(window::config()).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(LandingConfig::default);

    rsx! {
        document::Style { "{THEME_CSS}" }

        // Keyed on the language so a locale switch remounts every section.
        div { key: "{lang_code()}", LandingPage {} }
    }
}

#[cfg(feature = "desktop")]
mod window {
    use std::path::PathBuf;

    use dioxus::desktop::tao::dpi::LogicalSize;
    use dioxus::desktop::tao::window::WindowBuilder;
    use dioxus::desktop::Config;

    use ui::content::BRAND;

    pub fn config() -> Config {
        let window = WindowBuilder::new()
            .with_title(BRAND)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(LogicalSize::new(360.0, 640.0));

        Config::new()
            .with_window(window)
            .with_resource_directory(resource_dir())
    }

    fn resource_dir() -> PathBuf {
        if cfg!(debug_assertions) {
            // `cargo run` / `dx serve`: read straight from the ui crate.
            return PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"));
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
