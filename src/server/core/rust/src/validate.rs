/* src/server/core/rust/src/validate.rs */

//! Fail-fast config checks. `check_document` covers shapes that only an
//! untyped document can get wrong; `validate_config` covers the invariants
//! every config must hold regardless of where it came from.

use serde_json::Value;

use crate::config::{LocaleConfig, ServerSetCookie};
use crate::errors::ConfigError;

pub fn validate_config(config: &LocaleConfig) -> Result<(), ConfigError> {
  if config.locales.is_empty() {
    return Err(ConfigError::LocalesEmpty);
  }
  if config.default_locale.is_empty() {
    return Err(ConfigError::MissingDefaultLocale);
  }
  if !config.is_locale(&config.default_locale) {
    return Err(ConfigError::DefaultLocaleNotInLocales(config.default_locale.clone()));
  }
  Ok(())
}

pub fn check_document(doc: &Value) -> Result<(), ConfigError> {
  let Some(obj) = doc.as_object() else {
    return Err(ConfigError::InvalidField {
      field: "config".into(),
      message: "expected a table of settings".into(),
    });
  };

  match obj.get("locales") {
    Some(Value::Array(items)) => {
      if items.iter().any(|v| !v.is_string()) {
        return Err(ConfigError::LocaleNotString);
      }
    }
    _ => return Err(ConfigError::LocalesNotArray),
  }

  match obj.get("default_locale") {
    Some(Value::String(s)) if !s.is_empty() => {}
    _ => return Err(ConfigError::MissingDefaultLocale),
  }

  // Only `false` can be expressed in a document; code detectors are set in Rust.
  if let Some(detector) = obj.get("locale_detector") {
    if !matches!(detector, Value::Bool(false) | Value::Null) {
      return Err(ConfigError::LocaleDetector);
    }
  }

  if let Some(options) = obj.get("cookie_options") {
    match options {
      Value::Object(map) => check_cookie_options(map)?,
      Value::Null => {}
      _ => return Err(ConfigError::CookieOptions),
    }
  }

  if let Some(policy) = obj.get("server_set_cookie") {
    match policy {
      Value::String(s) if ServerSetCookie::VALUES.contains(&s.as_str()) => {}
      Value::Null => {}
      _ => return Err(ConfigError::ServerSetCookie),
    }
  }

  for key in ["prefix_default", "no_prefix", "permanent_redirect"] {
    expect_kind(obj, key, Value::is_boolean, "expected a boolean")?;
  }
  for key in ["base_path", "locale_cookie"] {
    expect_kind(obj, key, Value::is_string, "expected a string")?;
  }
  Ok(())
}

fn check_cookie_options(map: &serde_json::Map<String, Value>) -> Result<(), ConfigError> {
  for key in ["path", "domain"] {
    expect_kind(map, key, Value::is_string, "expected a string")
      .map_err(|_| invalid(&format!("cookie_options.{key}"), "expected a string"))?;
  }
  for key in ["secure", "http_only"] {
    expect_kind(map, key, Value::is_boolean, "expected a boolean")
      .map_err(|_| invalid(&format!("cookie_options.{key}"), "expected a boolean"))?;
  }
  expect_kind(map, "max_age", Value::is_u64, "expected a non-negative integer")
    .map_err(|_| invalid("cookie_options.max_age", "expected a non-negative integer"))?;
  match map.get("same_site") {
    None | Some(Value::Null) => {}
    Some(Value::String(s)) if matches!(s.as_str(), "strict" | "lax" | "none") => {}
    Some(_) => return Err(invalid("cookie_options.same_site", "expected strict | lax | none")),
  }
  Ok(())
}

/// Absent and `null` keys fall back to defaults; anything else must have the right kind.
fn expect_kind(
  map: &serde_json::Map<String, Value>,
  key: &str,
  is_kind: fn(&Value) -> bool,
  message: &str,
) -> Result<(), ConfigError> {
  match map.get(key) {
    None | Some(Value::Null) => Ok(()),
    Some(v) if is_kind(v) => Ok(()),
    Some(_) => Err(invalid(key, message)),
  }
}

fn invalid(field: &str, message: &str) -> ConfigError {
  ConfigError::InvalidField { field: field.to_string(), message: message.to_string() }
}
