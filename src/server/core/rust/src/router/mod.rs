/* src/server/core/rust/src/router/mod.rs */

use std::sync::Arc;

use crate::config::{LocaleConfig, ServerSetCookie};
use crate::decision::{CookieWrite, RouterDecision, Routed};
use crate::diagnostics::{DiagnosticSink, SharedSink, default_sink};
use crate::errors::ConfigError;
use crate::matcher::{PathMatch, match_path_locale};
use crate::request::LocaleRequest;
use crate::resolver::{cookie_locale, resolve_locale};
use crate::validate::validate_config;

/// Validated router. Build once at startup and share; `route` holds no state
/// between calls.
#[derive(Clone)]
pub struct LocaleRouter {
  config: Arc<LocaleConfig>,
  sink: SharedSink,
}

impl LocaleRouter {
  pub fn new(config: LocaleConfig) -> Result<Self, ConfigError> {
    validate_config(&config)?;
    Ok(Self { config: Arc::new(config), sink: default_sink() })
  }

  /// Replace the default `tracing` sink for policy diagnostics.
  pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
    self.sink = Arc::new(sink);
    self
  }

  pub fn config(&self) -> &LocaleConfig {
    &self.config
  }

  pub fn route(&self, request: &dyn LocaleRequest) -> Routed {
    let routed = decide(request, &self.config, self.sink.as_ref());
    tracing::debug!(
      target: "locale_router",
      path = request.pathname(),
      locale = routed.locale(),
      decision = ?routed.decision,
      "routed"
    );
    routed
  }
}

/// Validate `config`, then route one request. For per-request configs; a
/// long-lived `LocaleRouter` validates only once.
pub fn i18n_router(request: &dyn LocaleRequest, config: &LocaleConfig) -> Result<Routed, ConfigError> {
  validate_config(config)?;
  Ok(decide(request, config, default_sink().as_ref()))
}

fn decide(request: &dyn LocaleRequest, config: &LocaleConfig, sink: &dyn DiagnosticSink) -> Routed {
  let pathname = request.pathname();
  let search = search_suffix(request.query_string());

  if config.no_prefix {
    let locale = resolve_locale(request, config, sink);
    let path = prefixed_path(&config.base_path, &locale, pathname, &search);
    return Routed::new(RouterDecision::Rewrite { path, locale });
  }

  let Some(matched) = match_path_locale(pathname, &config.locales) else {
    return route_unprefixed(request, config, sink, &search);
  };

  let cookie = cookie_locale(request, config);
  // A cookie that disagrees with the path wins unless the server always overwrites it.
  if let Some(preferred) = cookie
    && preferred != matched.locale
    && config.server_set_cookie != ServerSetCookie::Always
  {
    let path = locale_path(config, preferred, &matched, &search);
    return Routed::new(redirect(request, config, &path, preferred));
  }

  let write = cookie_write(config, matched.locale, cookie);
  if !config.prefix_default && matched.locale == config.default_locale {
    let path = collapse_default(&config.base_path, matched.remainder, &search);
    return Routed::new(redirect(request, config, &path, matched.locale)).with_cookie(write);
  }

  Routed::new(RouterDecision::PassThrough { locale: matched.locale.to_string() }).with_cookie(write)
}

/// No locale segment in the path: pick one and either redirect to the
/// prefixed URL or, for an unprefixed default, rewrite to it internally.
fn route_unprefixed(
  request: &dyn LocaleRequest,
  config: &LocaleConfig,
  sink: &dyn DiagnosticSink,
  search: &str,
) -> Routed {
  let locale = resolve_locale(request, config, sink);
  let path = prefixed_path(&config.base_path, &locale, request.pathname(), search);
  if config.prefix_default || locale != config.default_locale {
    Routed::new(redirect(request, config, &path, &locale))
  } else {
    Routed::new(RouterDecision::Rewrite { path, locale })
  }
}

/// Canonical URL path of `matched.rest` under `target`: unprefixed for an
/// unprefixed default, so the redirect lands in one hop.
fn locale_path(config: &LocaleConfig, target: &str, matched: &PathMatch<'_>, search: &str) -> String {
  if !config.prefix_default && target == config.default_locale {
    return collapse_default(&config.base_path, matched.remainder, search);
  }
  let localized = format!("/{target}{}", matched.rest);
  format!("{}{search}", join_base(&config.base_path, &localized))
}

fn cookie_write(config: &LocaleConfig, path_locale: &str, current: Option<&str>) -> Option<CookieWrite> {
  let name = config.cookie_name()?;
  let write = match config.server_set_cookie {
    ServerSetCookie::Never => false,
    ServerSetCookie::Always => current != Some(path_locale),
    ServerSetCookie::IfEmpty => current.is_none(),
  };
  if !write {
    return None;
  }
  let options = &config.cookie_options;
  Some(CookieWrite {
    name: name.to_string(),
    value: path_locale.to_string(),
    path: options.resolved_path(&config.base_path),
    max_age: options.max_age,
    same_site: options.same_site,
    secure: options.secure,
    http_only: options.http_only,
    domain: options.domain.clone(),
  })
}

fn redirect(request: &dyn LocaleRequest, config: &LocaleConfig, path: &str, locale: &str) -> RouterDecision {
  RouterDecision::Redirect {
    url: absolute_url(request.base_url(), path),
    permanent: config.permanent_redirect,
    locale: locale.to_string(),
  }
}

fn search_suffix(query: &str) -> String {
  if query.is_empty() { String::new() } else { format!("?{query}") }
}

/// `base_path` + `path`, without doubling the slash between them.
fn join_base(base_path: &str, path: &str) -> String {
  if base_path.ends_with('/') {
    format!("{base_path}{}", path.strip_prefix('/').unwrap_or(path))
  } else {
    format!("{base_path}{path}")
  }
}

fn prefixed_path(base_path: &str, locale: &str, pathname: &str, search: &str) -> String {
  format!("{}{search}", join_base(base_path, &format!("/{locale}{pathname}")))
}

fn collapse_default(base_path: &str, remainder: &str, search: &str) -> String {
  format!("{}{search}", join_base(base_path, remainder))
}

/// Resolve `path` against the origin of `base_url`; path-only when unknown.
fn absolute_url(base_url: &str, path: &str) -> String {
  let Some(scheme_end) = base_url.find("://") else {
    return path.to_string();
  };
  let authority_start = scheme_end + 3;
  let origin_end =
    base_url[authority_start..].find(['/', '?', '#']).map_or(base_url.len(), |i| authority_start + i);
  format!("{}{path}", &base_url[..origin_end])
}

#[cfg(test)]
mod tests;
