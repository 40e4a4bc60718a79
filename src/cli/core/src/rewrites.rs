/* src/cli/core/src/rewrites.rs */

use std::path::Path;

use anyhow::{Context, Result};
use locale_router::{LocaleConfig, WildcardStyle, i18n_rewrites_with};

use crate::ui;

pub fn render_rewrites(config: &LocaleConfig, style: WildcardStyle) -> Result<String> {
  let rules = i18n_rewrites_with(config, style);
  serde_json::to_string_pretty(&rules).context("failed to serialize rewrite rules")
}

/// Print the rule list, or write it to `out` when given.
pub fn run_rewrites(config: &LocaleConfig, style: WildcardStyle, out: Option<&Path>) -> Result<()> {
  let json = render_rewrites(config, style)?;
  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
      let count = i18n_rewrites_with(config, style).len();
      ui::ok(&format!("{}  {count} rules", path.display()));
    }
    None => println!("{json}"),
  }
  Ok(())
}
