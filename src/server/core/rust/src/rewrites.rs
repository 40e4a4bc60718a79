/* src/server/core/rust/src/rewrites.rs */

use serde::{Deserialize, Serialize};

use crate::config::LocaleConfig;

/// Static rewrite for hosts that route by rule table rather than middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
  pub source: String,
  pub destination: String,
}

/// How the catch-all segment is spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WildcardStyle {
  /// `/:path*`, the Next.js rewrite syntax.
  #[default]
  NamedParam,
  /// `/*`
  Glob,
}

impl WildcardStyle {
  fn catch_all(self) -> &'static str {
    match self {
      Self::NamedParam => "/:path*",
      Self::Glob => "/*",
    }
  }
}

pub fn i18n_rewrites(config: &LocaleConfig) -> Vec<RewriteRule> {
  i18n_rewrites_with(config, WildcardStyle::default())
}

/// Two rules per prefixed locale, in locale order: the bare prefix maps to
/// `/`, and everything below it maps to the same path without the prefix.
pub fn i18n_rewrites_with(config: &LocaleConfig, style: WildcardStyle) -> Vec<RewriteRule> {
  let wildcard = style.catch_all();
  config
    .locales
    .iter()
    .filter(|locale| config.prefix_default || **locale != config.default_locale)
    .flat_map(|locale| {
      [
        RewriteRule { source: format!("/{locale}"), destination: "/".to_string() },
        RewriteRule { source: format!("/{locale}{wildcard}"), destination: wildcard.to_string() },
      ]
    })
    .collect()
}
