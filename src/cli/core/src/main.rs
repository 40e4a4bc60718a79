/* src/cli/core/src/main.rs */

mod check;
mod config;
mod rewrites;
mod route;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locale_router::WildcardStyle;
use tracing_subscriber::EnvFilter;

use config::{RouterFile, RuleStyle, find_router_config, load_router_file};

#[derive(Parser)]
#[command(name = "locale-router", about = "Locale routing: config checks, rewrite rules, request simulation")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Load and validate locale-router.toml, then print a summary
  Check {
    /// Path to locale-router.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Emit static rewrite rules as JSON
  Rewrites {
    /// Path to locale-router.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Use `/*` wildcards instead of `/:path*`
    #[arg(long)]
    glob: bool,
    /// Output file (defaults to [rewrites].out, else stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Simulate one request and print the routing decision
  Route {
    /// Request path, optionally with a query string
    path: Option<String>,
    /// Path to locale-router.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Accept-Language header value
    #[arg(short, long)]
    accept_language: Option<String>,
    /// Cookie header value
    #[arg(long)]
    cookie: Option<String>,
    /// Absolute request URL used to build redirect targets
    #[arg(long)]
    base_url: Option<String>,
    /// JSON request fixture; flags override its fields
    #[arg(long)]
    request: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, RouterFile)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_router_config(&cwd)?
    }
  };
  let file = load_router_file(&path)?;
  tracing::debug!(path = %path.display(), "loaded config");
  Ok((path, file))
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env("LOCALE_ROUTER_LOG")
    .unwrap_or_else(|_| EnvFilter::new("locale_router=warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Command::Check { config } => {
      ui::banner("check");
      let (path, file) = resolve_config(config)?;
      check::run_check(&path, &file)?;
    }
    Command::Rewrites { config, glob, out } => {
      let (path, file) = resolve_config(config)?;
      let style = if glob { RuleStyle::Glob } else { file.rewrites.style };
      let out = out.or_else(|| {
        let base = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        file.rewrites.out.as_ref().map(|o| base.join(o))
      });
      let locale_config = file.locale_config()?;
      rewrites::run_rewrites(&locale_config, WildcardStyle::from(style), out.as_deref())?;
    }
    Command::Route { path, config, accept_language, cookie, base_url, request } => {
      let (_, file) = resolve_config(config)?;
      let args = route::RouteArgs { path, accept_language, cookie, base_url, request };
      route::run_route(file.locale_config()?, &args)?;
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  init_tracing();
  let cli = Cli::parse();
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      ui::fail(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
