#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the selectors and keyframes the landing page markup relies on stay
  present in the shared theme: ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, which would otherwise only show
  up as a styling regression in packaged (embedded) desktop builds.

How it works:
- The theme is embedded with `include_str!` (mirrors the constant in `desktop/src/main.rs`).
- Presence of each selector / token is a plain substring check.

Extending:
- Add new selectors to REQUIRED_SELECTORS when components start relying on them.
- Animation names used by `ui::core::motion` belong in REQUIRED_KEYFRAMES.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".landing {",
    ".visually-hidden",
    ".text-gradient {",
    ".text-gradient--sakura {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--sakura",
    ".button--lg",
    // Header
    ".site-header {",
    ".site-header--scrolled",
    ".site-header__links",
    ".site-header__link",
    ".site-header__toggle",
    ".site-header__mobile",
    ".site-header__locale",
    // Hero
    ".hero {",
    ".hero__backdrop",
    ".hero__copy",
    ".hero__fade-out",
    ".floating-shape",
    ".connecting-lines__line",
    // Sections
    ".section__title",
    ".vision__body",
    ".services__grid",
    ".service-card__icon",
    ".showcase__badge",
    ".showcase-card__columns",
    ".showcase-card__list",
    // Footer
    ".site-footer__links",
    ".site-footer__copyright",
    // Responsive breakpoints (single column, two columns, four columns)
    "@media (min-width: 768px)",
    "@media (min-width: 1024px)",
];

const REQUIRED_KEYFRAMES: &[&str] = &["float", "draw-line", "slide-in-left", "fade-in-up", "fade-in"];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_defines_every_animation() {
    for name in REQUIRED_KEYFRAMES {
        let rule = format!("@keyframes {name} {{");
        assert!(THEME_CSS.contains(&rule), "missing `{rule}` in unified theme");
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) - \
         did the file get truncated or path change?",
        non_ws_len
    );
}
