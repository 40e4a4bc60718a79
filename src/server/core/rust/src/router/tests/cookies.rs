/* src/server/core/rust/src/router/tests/cookies.rs */

// Cookie precedence and the write policy.

use super::*;
use crate::config::{CookieOptions, SameSite, ServerSetCookie};

fn with_cookie(path: &str, accept: &[&str], cookie: &str) -> StaticRequest {
  request(path, accept).with_cookie("NEXT_LOCALE", cookie)
}

fn written(routed: &Routed) -> Option<&str> {
  routed.cookie.as_ref().map(|c| c.value.as_str())
}

#[test]
fn cookie_picks_locale_for_unprefixed_path() {
  for base in BASE_PATHS {
    let config = en_jp().base_path(base);
    let routed = route(&config, &with_cookie("/faq", &["en"], "jp"));
    assert_eq!(redirect_target(&routed), format!("{ORIGIN}{base}/jp/faq"));
    assert_eq!(routed.cookie, None);
  }
}

#[test]
fn invalid_cookie_is_ignored() {
  let routed = route(&en_jp(), &with_cookie("/faq", &["en"], "fr"));
  assert_eq!(rewrite_target(&routed), "/en/faq");
  let routed = route(&en_jp(), &with_cookie("/faq", &["en"], ""));
  assert_eq!(rewrite_target(&routed), "/en/faq");
}

#[test]
fn cookie_mismatch_redirects_unless_always() {
  for policy in [ServerSetCookie::IfEmpty, ServerSetCookie::Never] {
    let config = en_jp().prefix_default(true).server_set_cookie(policy);
    let routed = route(&config, &with_cookie("/en/faq?a=1", &["en"], "jp"));
    assert_eq!(redirect_target(&routed), format!("{ORIGIN}/jp/faq?a=1"), "{policy:?}");
    assert_eq!(routed.locale(), "jp");
    assert_eq!(routed.cookie, None);
  }
}

#[test]
fn cookie_redirect_beats_default_collapse() {
  let config = en_jp().server_set_cookie(ServerSetCookie::IfEmpty);
  let routed = route(&config, &with_cookie("/en/faq", &["en"], "jp"));
  assert_eq!(redirect_target(&routed), format!("{ORIGIN}/jp/faq"));
}

#[test]
fn cookie_redirect_to_default_lands_unprefixed() {
  for base in BASE_PATHS {
    let config = en_jp().base_path(base).server_set_cookie(ServerSetCookie::Never);
    let routed = route(&config, &with_cookie("/jp/faq", &["jp"], "en"));
    assert_eq!(redirect_target(&routed), format!("{ORIGIN}{base}/faq"));
    let routed = route(&config, &with_cookie("/jp", &["jp"], "en"));
    assert_eq!(redirect_target(&routed), format!("{ORIGIN}{base}/"));
  }
}

#[test]
fn always_policy_lets_path_win() {
  let routed = route(&en_jp(), &with_cookie("/jp/faq", &["en"], "en"));
  assert_eq!(routed.decision, RouterDecision::PassThrough { locale: "jp".into() });
  assert_eq!(written(&routed), Some("jp"));
}

#[test]
fn always_policy_skips_matching_cookie() {
  let routed = route(&en_jp(), &with_cookie("/jp/faq", &["en"], "jp"));
  assert_eq!(routed.decision, RouterDecision::PassThrough { locale: "jp".into() });
  assert_eq!(routed.cookie, None);
}

#[test]
fn always_policy_writes_when_absent() {
  let routed = route(&en_jp(), &request("/jp/faq", &["en"]));
  let cookie = routed.cookie.expect("cookie write");
  assert_eq!(
    cookie.to_header_value(),
    "NEXT_LOCALE=jp; Path=/; Max-Age=31536000; SameSite=Lax"
  );
}

#[test]
fn default_collapse_persists_locale() {
  let routed = route(&en_jp(), &with_cookie("/en/faq", &["jp"], "jp"));
  assert_eq!(redirect_target(&routed), format!("{ORIGIN}/faq"));
  assert_eq!(written(&routed), Some("en"));
}

#[test]
fn if_empty_writes_only_without_cookie() {
  let config = en_jp().server_set_cookie(ServerSetCookie::IfEmpty);
  let routed = route(&config, &request("/jp/faq", &["en"]));
  assert_eq!(written(&routed), Some("jp"));
  let routed = route(&config, &with_cookie("/jp/faq", &["en"], "jp"));
  assert_eq!(routed.cookie, None);
  let routed = route(&config, &with_cookie("/jp/faq", &["en"], "fr"));
  assert_eq!(written(&routed), Some("jp"));
}

#[test]
fn never_policy_never_writes() {
  let config = en_jp().server_set_cookie(ServerSetCookie::Never);
  let routed = route(&config, &request("/jp/faq", &["en"]));
  assert_eq!(routed.decision, RouterDecision::PassThrough { locale: "jp".into() });
  assert_eq!(routed.cookie, None);
}

#[test]
fn disabled_cookie_name_disables_reads_and_writes() {
  let config = en_jp().locale_cookie("").server_set_cookie(ServerSetCookie::IfEmpty);
  let routed = route(&config, &with_cookie("/en/faq", &["en"], "jp"));
  assert_eq!(redirect_target(&routed), format!("{ORIGIN}/faq"));
  assert_eq!(routed.cookie, None);
}

#[test]
fn custom_cookie_name() {
  let config = en_jp().locale_cookie("lang");
  let routed = route(&config, &request("/faq", &["en"]).with_cookie("lang", "jp"));
  assert_eq!(redirect_target(&routed), format!("{ORIGIN}/jp/faq"));
  let routed = route(&config, &request("/jp", &["en"]));
  assert_eq!(routed.cookie.map(|c| c.name), Some("lang".to_string()));
}

#[test]
fn cookie_path_follows_base_path() {
  let config = en_jp().base_path("/with-basepath/");
  let routed = route(&config, &request("/jp/faq", &["en"]));
  assert_eq!(routed.cookie.map(|c| c.path), Some("/with-basepath".to_string()));
}

#[test]
fn cookie_options_are_applied() {
  let options = CookieOptions {
    path: Some("/app".into()),
    max_age: 60,
    same_site: SameSite::Strict,
    secure: true,
    http_only: true,
    domain: Some("example.com".into()),
  };
  let config = en_jp().cookie_options(options);
  let routed = route(&config, &request("/jp", &["en"]));
  assert_eq!(
    routed.cookie.map(|c| c.to_header_value()),
    Some("NEXT_LOCALE=jp; Path=/app; Max-Age=60; SameSite=Strict; Domain=example.com; Secure; HttpOnly".into())
  );
}

#[test]
fn no_prefix_uses_cookie_and_never_writes() {
  let config = en_jp().no_prefix(true);
  let routed = route(&config, &with_cookie("/faq", &["en"], "jp"));
  assert_eq!(rewrite_target(&routed), "/jp/faq");
  assert_eq!(routed.cookie, None);
}
