//! Errors raised while wiring the page to its host document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("no catalog ships for `{0}`")]
    Unsupported(String),
    #[error(transparent)]
    Select(#[from] i18n_embed::I18nEmbedError),
}
