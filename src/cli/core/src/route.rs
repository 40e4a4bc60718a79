/* src/cli/core/src/route.rs */

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use locale_router::{Diagnostic, LocaleConfig, LocaleRouter, Routed, StaticRequest};

use crate::ui;

/// One simulated request, from flags and/or a JSON fixture.
#[derive(Debug, Default)]
pub struct RouteArgs {
  pub path: Option<String>,
  pub accept_language: Option<String>,
  /// Raw `Cookie` header.
  pub cookie: Option<String>,
  pub base_url: Option<String>,
  pub request: Option<PathBuf>,
}

/// Fixture first, then flags on top of it.
pub fn build_request(args: &RouteArgs) -> Result<StaticRequest> {
  let mut request = match (args.request.as_ref(), args.path.as_deref()) {
    (Some(fixture), _) => {
      let content = std::fs::read_to_string(fixture)
        .with_context(|| format!("failed to read {}", fixture.display()))?;
      let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", fixture.display()))?;
      StaticRequest::from_value(&value).with_context(|| format!("invalid request in {}", fixture.display()))?
    }
    (None, Some(path)) => StaticRequest::new(path),
    (None, None) => bail!("a request path or --request fixture is required"),
  };

  if let (Some(_), Some(path)) = (args.request.as_ref(), args.path.as_deref()) {
    let parsed = StaticRequest::new(path);
    request.pathname = parsed.pathname;
    request.query = parsed.query;
  }
  if let Some(ref accept) = args.accept_language {
    request = request.with_header("accept-language", accept.as_str());
  }
  if let Some(ref header) = args.cookie {
    for (name, value) in cookies_from_header(header) {
      request = request.with_cookie(name, value);
    }
  }
  if let Some(ref url) = args.base_url {
    request = request.with_base_url(url.as_str());
  }
  Ok(request)
}

fn cookies_from_header(header: &str) -> Vec<(String, String)> {
  header
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
    .filter(|(k, _)| !k.is_empty())
    .collect()
}

/// Route once, collecting policy diagnostics instead of logging them.
pub fn route_with_diagnostics(config: LocaleConfig, request: &StaticRequest) -> Result<(Routed, Vec<String>)> {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let captured = Arc::clone(&seen);
  let router = LocaleRouter::new(config)?.with_sink(move |d: &Diagnostic| {
    if let Ok(mut list) = captured.lock() {
      list.push(d.to_string());
    }
  });
  let routed = router.route(request);
  let diagnostics = seen.lock().map(|list| list.clone()).unwrap_or_default();
  Ok((routed, diagnostics))
}

pub fn render_outcome(routed: &Routed) -> Result<String> {
  let headers: Vec<_> = routed
    .response_headers()
    .into_iter()
    .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
    .collect();
  let outcome = serde_json::json!({
    "decision": routed.decision,
    "status": routed.status(),
    "cookie": routed.cookie,
    "headers": headers,
  });
  serde_json::to_string_pretty(&outcome).context("failed to serialize decision")
}

pub fn run_route(config: LocaleConfig, args: &RouteArgs) -> Result<()> {
  let request = build_request(args)?;
  let (routed, diagnostics) = route_with_diagnostics(config, &request)?;
  for message in &diagnostics {
    ui::warn(message);
  }
  println!("{}", render_outcome(&routed)?);
  Ok(())
}
