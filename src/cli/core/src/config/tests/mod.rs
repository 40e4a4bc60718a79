/* src/cli/core/src/config/tests/mod.rs */

use super::*;

mod discovery;
mod parsing;

fn parse(toml_str: &str) -> RouterFile {
  toml::from_str(toml_str).unwrap()
}

/// Root error message of a failed `locale_config`, below the anyhow context.
fn config_error(toml_str: &str) -> String {
  let err = parse(toml_str).locale_config().unwrap_err();
  err.root_cause().to_string()
}
