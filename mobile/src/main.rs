use dioxus::prelude::*;

use ui::components::Theme;
use ui::config::LandingConfig;
use ui::i18n;
use ui::views::LandingPage;

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
        Theme {}

        div { key: "{lang_code()}", LandingPage {} }
    }
}
