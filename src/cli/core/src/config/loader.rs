/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::RouterFile;

pub const CONFIG_FILE: &str = "locale-router.toml";

/// Nearest `locale-router.toml` in `start` or one of its ancestors.
pub fn find_router_config(start: &Path) -> Result<PathBuf> {
  let start_dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  start_dir
    .ancestors()
    .map(|dir| dir.join(CONFIG_FILE))
    .find(|candidate| candidate.is_file())
    .ok_or_else(|| anyhow!("{CONFIG_FILE} not found in {} or any parent", start.display()))
}

pub fn load_router_file(path: &Path) -> Result<RouterFile> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
