/* src/server/core/rust/src/errors.rs */

use thiserror::Error;

/// Structural problems in a locale config. Raised before any request work;
/// these are programmer errors, never degraded into a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("The config requires a 'locales' array.")]
  LocalesNotArray,

  #[error("The 'locales' array must not be empty.")]
  LocalesEmpty,

  #[error("Every entry of the 'locales' array must be a string.")]
  LocaleNotString,

  #[error("The config requires a 'default_locale'.")]
  MissingDefaultLocale,

  #[error("The 'default_locale' \"{0}\" must be contained in 'locales' array.")]
  DefaultLocaleNotInLocales(String),

  #[error("'locale_detector' must be a function or false.")]
  LocaleDetector,

  #[error("'cookie_options' must be an object.")]
  CookieOptions,

  #[error("Invalid 'server_set_cookie' value. Valid values are if-empty | always | never")]
  ServerSetCookie,

  #[error("Invalid '{field}' value: {message}")]
  InvalidField { field: String, message: String },
}

impl ConfigError {
  /// Config key the error is about.
  pub fn field(&self) -> &str {
    match self {
      Self::LocalesNotArray | Self::LocalesEmpty | Self::LocaleNotString => "locales",
      Self::MissingDefaultLocale | Self::DefaultLocaleNotInLocales(_) => "default_locale",
      Self::LocaleDetector => "locale_detector",
      Self::CookieOptions => "cookie_options",
      Self::ServerSetCookie => "server_set_cookie",
      Self::InvalidField { field, .. } => field,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("{operation} requires a {argument} argument.")]
  MissingArgument { operation: &'static str, argument: &'static str },
}

impl RouterError {
  pub fn missing(operation: &'static str, argument: &'static str) -> Self {
    Self::MissingArgument { operation, argument }
  }
}
