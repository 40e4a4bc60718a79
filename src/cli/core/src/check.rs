/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::Result;
use locale_router::{LocaleConfig, LocaleDetector, LocaleRouter, i18n_rewrites};

use crate::config::RouterFile;
use crate::ui;

pub fn run_check(path: &Path, file: &RouterFile) -> Result<()> {
  ui::arrow(&format!("reading {}", path.display()));
  let config = file.locale_config()?;
  let router = LocaleRouter::new(config)?;
  ui::ok("config is valid");
  for line in summary(router.config()) {
    ui::detail(&line);
  }
  Ok(())
}

fn summary(config: &LocaleConfig) -> Vec<String> {
  let mode = if config.no_prefix {
    "no prefix (rewrite only)"
  } else if config.prefix_default {
    "every locale prefixed"
  } else {
    "default locale unprefixed"
  };
  let detector = match config.locale_detector {
    LocaleDetector::Negotiate => "accept-language",
    LocaleDetector::Disabled => "disabled",
    LocaleDetector::Custom(_) => "custom",
  };
  let cookie = config.cookie_name().unwrap_or("(disabled)");
  let base_path = if config.base_path.is_empty() { "/" } else { config.base_path.as_str() };

  vec![
    format!("locales      {}", config.locales.join(", ")),
    format!("default      {}", config.default_locale),
    format!("mode         {mode}"),
    format!("base path    {base_path}"),
    format!("detector     {detector}"),
    format!("cookie       {cookie} (server writes: {})", config.server_set_cookie.as_str()),
    format!("redirects    {}", if config.permanent_redirect { "301" } else { "307" }),
    format!("rewrites     {} rules", i18n_rewrites(config).len()),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_reflects_config() {
    let config = LocaleConfig::new(["en", "jp"], "en").locale_cookie("").permanent_redirect(true);
    let lines = summary(&config);
    assert_eq!(lines[0], "locales      en, jp");
    assert_eq!(lines[2], "mode         default locale unprefixed");
    assert_eq!(lines[3], "base path    /");
    assert!(lines[5].starts_with("cookie       (disabled)"));
    assert_eq!(lines[6], "redirects    301");
    assert_eq!(lines[7], "rewrites     2 rules");
  }
}
