/* src/server/core/rust/src/router/tests/mod.rs */

use super::*;
use crate::config::LocaleConfig;
use crate::request::StaticRequest;

mod cookies;

const ORIGIN: &str = "https://example.com";
const BASE_PATHS: [&str; 2] = ["", "/with-basepath"];

fn request(path: &str, accept: &[&str]) -> StaticRequest {
  StaticRequest::new(path).with_accept_languages(accept).with_base_url(format!("{ORIGIN}/"))
}

fn en_jp() -> LocaleConfig {
  LocaleConfig::new(["en", "jp"], "en")
}

fn route(config: &LocaleConfig, req: &StaticRequest) -> Routed {
  match i18n_router(req, config) {
    Ok(routed) => routed,
    Err(e) => panic!("unexpected config error: {e}"),
  }
}

fn redirect_target(routed: &Routed) -> &str {
  match routed.decision {
    RouterDecision::Redirect { ref url, .. } => url,
    ref other => panic!("expected a redirect, got {other:?}"),
  }
}

fn rewrite_target(routed: &Routed) -> &str {
  match routed.decision {
    RouterDecision::Rewrite { ref path, .. } => path,
    ref other => panic!("expected a rewrite, got {other:?}"),
  }
}
