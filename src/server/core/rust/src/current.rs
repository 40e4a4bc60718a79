/* src/server/core/rust/src/current.rs */

// Reading the active locale after routing, from either side of the wire.

use crate::config::LocaleConfig;
use crate::matcher::match_path_locale;
use crate::request::parse_cookie;

/// Locale carried by the marker header, if the router set one.
pub fn locale_from_header(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

/// Value of `name` in a `document.cookie`-style string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
  parse_cookie(cookies, name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentLocaleInput<'a> {
  /// Cookie string as the page sees it.
  pub cookie: Option<&'a str>,
  /// Current pathname; `None` when the page could not report one.
  pub pathname: Option<&'a str>,
  /// The pathname still carries `base_path`. True in the browser, false
  /// during server rendering.
  pub include_base_path: bool,
}

/// The locale a rendered page is in, worked out without a request: a valid
/// cookie first, then the path prefix. `None` only when `prefix_default` is
/// set and the path names no locale.
pub fn current_locale(config: &LocaleConfig, input: CurrentLocaleInput<'_>) -> Option<String> {
  let from_cookie = config
    .cookie_name()
    .zip(input.cookie)
    .and_then(|(name, cookies)| cookie_value(cookies, name))
    .filter(|v| config.is_locale(v));
  if let Some(locale) = from_cookie {
    return Some(locale.to_string());
  }

  if config.no_prefix {
    return Some(config.default_locale.clone());
  }

  let base = if input.include_base_path { config.base_path.trim_end_matches('/') } else { "" };
  let matched = input
    .pathname
    .and_then(|path| path.strip_prefix(base))
    .and_then(|path| match_path_locale(path, &config.locales));
  if let Some(m) = matched {
    return Some(m.locale.to_string());
  }

  if config.prefix_default { None } else { Some(config.default_locale.clone()) }
}
