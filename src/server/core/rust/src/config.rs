/* src/server/core/rust/src/config.rs */

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RouterError};
use crate::negotiate::{BestFitNegotiator, Negotiator};
use crate::request::LocaleRequest;

pub const DEFAULT_LOCALE_COOKIE: &str = "NEXT_LOCALE";
pub const DEFAULT_COOKIE_MAX_AGE: u64 = 31_536_000;

/// User-supplied locale picker, consulted when neither the path nor the
/// cookie names a locale.
pub type DetectorFn = Arc<dyn Fn(&dyn LocaleRequest, &LocaleConfig) -> String + Send + Sync>;

#[derive(Clone, Default)]
pub enum LocaleDetector {
  /// Accept-Language negotiation through the configured negotiator.
  #[default]
  Negotiate,
  /// Always fall back to `default_locale`.
  Disabled,
  Custom(DetectorFn),
}

impl fmt::Debug for LocaleDetector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Negotiate => f.write_str("Negotiate"),
      Self::Disabled => f.write_str("Disabled"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

/// When the server may overwrite the locale cookie.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerSetCookie {
  #[default]
  Always,
  IfEmpty,
  Never,
}

impl ServerSetCookie {
  pub const VALUES: [&'static str; 3] = ["if-empty", "always", "never"];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Always => "always",
      Self::IfEmpty => "if-empty",
      Self::Never => "never",
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
  Strict,
  #[default]
  Lax,
  None,
}

impl SameSite {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Strict => "Strict",
      Self::Lax => "Lax",
      Self::None => "None",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieOptions {
  /// `None` resolves per request (see `resolved_path`).
  pub path: Option<String>,
  pub max_age: u64,
  pub same_site: SameSite,
  pub secure: bool,
  pub http_only: bool,
  pub domain: Option<String>,
}

impl Default for CookieOptions {
  fn default() -> Self {
    Self {
      path: None,
      max_age: DEFAULT_COOKIE_MAX_AGE,
      same_site: SameSite::Lax,
      secure: false,
      http_only: false,
      domain: None,
    }
  }
}

impl CookieOptions {
  /// Explicit path, else the base path, else `/`.
  pub fn resolved_path(&self, base_path: &str) -> String {
    if let Some(ref path) = self.path {
      return path.clone();
    }
    let base = base_path.trim_end_matches('/');
    if base.is_empty() { "/".to_string() } else { base.to_string() }
  }
}

#[derive(Clone, Debug)]
pub struct LocaleConfig {
  /// Ordered: the first locale whose prefix matches a path wins.
  pub locales: Vec<String>,
  pub default_locale: String,
  pub prefix_default: bool,
  pub no_prefix: bool,
  pub base_path: String,
  /// Empty disables cookie-based resolution.
  pub locale_cookie: String,
  pub locale_detector: LocaleDetector,
  pub server_set_cookie: ServerSetCookie,
  pub cookie_options: CookieOptions,
  pub permanent_redirect: bool,
  pub negotiator: Arc<dyn Negotiator>,
}

impl LocaleConfig {
  pub fn new<I, S>(locales: I, default_locale: impl Into<String>) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      locales: locales.into_iter().map(Into::into).collect(),
      default_locale: default_locale.into(),
      prefix_default: false,
      no_prefix: false,
      base_path: String::new(),
      locale_cookie: DEFAULT_LOCALE_COOKIE.to_string(),
      locale_detector: LocaleDetector::Negotiate,
      server_set_cookie: ServerSetCookie::Always,
      cookie_options: CookieOptions::default(),
      permanent_redirect: false,
      negotiator: Arc::new(BestFitNegotiator),
    }
  }

  pub fn prefix_default(mut self, value: bool) -> Self {
    self.prefix_default = value;
    self
  }

  pub fn no_prefix(mut self, value: bool) -> Self {
    self.no_prefix = value;
    self
  }

  pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
    self.base_path = base_path.into();
    self
  }

  pub fn locale_cookie(mut self, name: impl Into<String>) -> Self {
    self.locale_cookie = name.into();
    self
  }

  pub fn locale_detector(mut self, detector: LocaleDetector) -> Self {
    self.locale_detector = detector;
    self
  }

  pub fn detect_with<F>(self, detector: F) -> Self
  where
    F: Fn(&dyn LocaleRequest, &LocaleConfig) -> String + Send + Sync + 'static,
  {
    self.locale_detector(LocaleDetector::Custom(Arc::new(detector)))
  }

  pub fn server_set_cookie(mut self, policy: ServerSetCookie) -> Self {
    self.server_set_cookie = policy;
    self
  }

  pub fn cookie_options(mut self, options: CookieOptions) -> Self {
    self.cookie_options = options;
    self
  }

  pub fn permanent_redirect(mut self, value: bool) -> Self {
    self.permanent_redirect = value;
    self
  }

  pub fn negotiator(mut self, negotiator: impl Negotiator + 'static) -> Self {
    self.negotiator = Arc::new(negotiator);
    self
  }

  pub fn is_locale(&self, candidate: &str) -> bool {
    self.locales.iter().any(|l| l == candidate)
  }

  /// Cookie name, or `None` when cookie resolution is disabled.
  pub fn cookie_name(&self) -> Option<&str> {
    if self.locale_cookie.is_empty() { None } else { Some(&self.locale_cookie) }
  }

  /// Build a config from an untyped document (JSON, or TOML converted to JSON).
  /// Structural checks run before deserialization so errors name the field.
  pub fn from_value(value: &serde_json::Value) -> Result<Self, RouterError> {
    if value.is_null() {
      return Err(RouterError::missing("i18n_router", "config"));
    }
    crate::validate::check_document(value)?;

    let doc: ConfigDocument = serde_json::from_value(value.clone())
      .map_err(|e| ConfigError::InvalidField { field: "config".into(), message: e.to_string() })?;
    let config = doc.into_config();
    crate::validate::validate_config(&config)?;
    Ok(config)
  }
}

/// Serde view of a config document. Detector code cannot live in a document,
/// so `locale_detector` is either absent or `false`.
#[derive(Deserialize)]
struct ConfigDocument {
  locales: Vec<String>,
  default_locale: String,
  #[serde(default)]
  prefix_default: bool,
  #[serde(default)]
  no_prefix: bool,
  #[serde(default)]
  base_path: String,
  #[serde(default = "default_locale_cookie")]
  locale_cookie: String,
  #[serde(default)]
  locale_detector: Option<bool>,
  #[serde(default)]
  server_set_cookie: ServerSetCookie,
  #[serde(default)]
  cookie_options: CookieOptions,
  #[serde(default)]
  permanent_redirect: bool,
}

fn default_locale_cookie() -> String {
  DEFAULT_LOCALE_COOKIE.to_string()
}

impl ConfigDocument {
  fn into_config(self) -> LocaleConfig {
    let detector = match self.locale_detector {
      Some(false) => LocaleDetector::Disabled,
      _ => LocaleDetector::Negotiate,
    };
    LocaleConfig::new(self.locales, self.default_locale)
      .prefix_default(self.prefix_default)
      .no_prefix(self.no_prefix)
      .base_path(self.base_path)
      .locale_cookie(self.locale_cookie)
      .locale_detector(detector)
      .server_set_cookie(self.server_set_cookie)
      .cookie_options(self.cookie_options)
      .permanent_redirect(self.permanent_redirect)
  }
}
