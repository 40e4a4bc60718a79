/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE, find_router_config, load_router_file};
pub use types::{RouterFile, RuleStyle};
