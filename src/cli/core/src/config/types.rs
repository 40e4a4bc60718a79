/* src/cli/core/src/config/types.rs */

use anyhow::{Context, Result};
use locale_router::{LocaleConfig, WildcardStyle};
use serde::Deserialize;

/// Contents of `locale-router.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterFile {
  /// Router settings, passed to the core untouched so its own checks name
  /// the offending key.
  #[serde(default)]
  pub router: Option<toml::Table>,
  #[serde(default)]
  pub rewrites: RewritesSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewritesSection {
  #[serde(default)]
  pub style: RuleStyle,
  /// Default output file for `locale-router rewrites`.
  pub out: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
  #[default]
  Named,
  Glob,
}

impl From<RuleStyle> for WildcardStyle {
  fn from(style: RuleStyle) -> Self {
    match style {
      RuleStyle::Named => Self::NamedParam,
      RuleStyle::Glob => Self::Glob,
    }
  }
}

impl RouterFile {
  /// Build and validate the core config from the `[router]` table.
  pub fn locale_config(&self) -> Result<LocaleConfig> {
    let value = match self.router {
      Some(ref table) => serde_json::to_value(table).context("failed to convert [router] table")?,
      None => serde_json::Value::Null,
    };
    LocaleConfig::from_value(&value).context("invalid [router] config")
  }
}
