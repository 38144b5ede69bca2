//! Errors raised while configuring or installing the theme controller.
//!
//! Theme operations themselves never fail: a missing element is a no-op.
//! Only setup paths (parsing config, reaching the browser globals, registering
//! listeners) surface a `ThemeError`.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser global unavailable: {0}")]
    MissingGlobal(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}
