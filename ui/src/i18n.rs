//! Localized copy for the landing page.
//!
//! Catalogs are Fluent files at `i18n/<tag>/roman-ui.ftl`, embedded at build
//! time. `ja-JP` is the reference catalog: `t!` keys are checked against it
//! when the crate compiles, and the page falls back to it when none of the
//! user's preferred languages has a catalog.
//!
//! Call [`init`] once before the first render, then look copy up with `t!`:
//! ```ignore
//! let title = crate::t!("hero-title");
//! ```
//!
//! New locales need a catalog folder and an entry in [`LOCALES`]; the
//! `i18n_missing_keys` integration test keeps catalogs in step.
//!
//! Header labels (`Vision`, `Services`, `SAKURA TOKYO`) are brand terms and
//! stay out of the catalogs: their anchor ids are derived from them.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

#[cfg(not(target_arch = "wasm32"))]
use i18n_embed::DesktopLanguageRequester as PlatformRequester;
#[cfg(target_arch = "wasm32")]
use i18n_embed::WebLanguageRequester as PlatformRequester;

use crate::error::LocaleError;

pub use i18n_embed_fl::fl;

/// Look a message up in the shared loader, with optional Fluent arguments (`name = value`).
#[macro_export]
macro_rules! t {
    ($key:literal $(, $arg:ident = $value:expr)* $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key $(, $arg = $value)*)
    };
}

/// Fluent domain; the catalog file stem.
const DOMAIN: &str = "roman-ui";

/// A language the page ships copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    /// Name shown in the locale picker, in the language itself.
    pub native_name: &'static str,
}

/// Shipped locales, reference catalog first.
pub const LOCALES: [Locale; 2] = [
    Locale {
        tag: "ja-JP",
        native_name: "日本語",
    },
    Locale {
        tag: "en-US",
        native_name: "English",
    },
];

pub const FALLBACK_LANGUAGE: &str = LOCALES[0].tag;

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogs;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK_LANGUAGE
        .parse::<LanguageIdentifier>()
        .unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load catalogs for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = PlatformRequester::requested_languages();
        match i18n_embed::select(&*LOADER, &Catalogs, &requested) {
            Ok(selected) => tracing::debug!(?selected, "[i18n] catalogs loaded"),
            Err(err) => tracing::warn!("[i18n] language selection failed ({err}); using {FALLBACK_LANGUAGE}"),
        }
    });
}

/// Switch the page to one of [`LOCALES`].
pub fn set_language(tag: &str) -> Result<Locale, LocaleError> {
    let unsupported = || LocaleError::Unsupported(tag.to_string());

    let locale = LOCALES
        .into_iter()
        .find(|locale| locale.tag == tag)
        .ok_or_else(unsupported)?;
    let id = locale
        .tag
        .parse::<LanguageIdentifier>()
        .map_err(|_| unsupported())?;

    i18n_embed::select(&*LOADER, &Catalogs, &[id])?;
    tracing::info!(locale = locale.tag, "[i18n] language switched");
    Ok(locale)
}

/// Tag of the language currently rendered.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locales whose catalog is actually embedded, in [`LOCALES`] order.
pub fn available_locales() -> Vec<Locale> {
    LOCALES
        .into_iter()
        .filter(|locale| is_embedded(locale.tag))
        .collect()
}

fn is_embedded(tag: &str) -> bool {
    Catalogs::iter().any(|path| path.split('/').next() == Some(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shipped_locale_has_a_catalog() {
        assert_eq!(available_locales(), LOCALES);
        assert_eq!(FALLBACK_LANGUAGE, "ja-JP");
    }

    // The only test that switches the global loader; others must not assert on copy.
    #[test]
    fn switching_language_changes_copy() {
        init();
        assert_eq!(set_language("ja-JP").unwrap().native_name, "日本語");
        assert_eq!(current_language(), "ja-JP");
        assert_eq!(fl!(&*LOADER, "hero-title"), "共創で未来を描く");

        set_language("en-US").unwrap();
        assert_eq!(current_language(), "en-US");
        assert_eq!(fl!(&*LOADER, "hero-title"), "Co-creating the future");

        assert!(matches!(
            set_language("fr-FR"),
            Err(LocaleError::Unsupported(tag)) if tag == "fr-FR"
        ));
        assert!(set_language("not a tag!").is_err());
        assert_eq!(current_language(), "en-US");

        set_language(FALLBACK_LANGUAGE).unwrap();
    }
}
