/* src/cli/core/src/config/tests/parsing.rs */

use locale_router::{SameSite, ServerSetCookie};

use super::*;

#[test]
fn parse_minimal_config() {
  let file = parse(
    r#"
[router]
locales = ["en", "jp"]
default_locale = "en"
"#,
  );
  assert_eq!(file.rewrites.style, RuleStyle::Named);
  assert!(file.rewrites.out.is_none());
  let config = file.locale_config().unwrap();
  assert_eq!(config.locales, ["en", "jp"]);
  assert_eq!(config.default_locale, "en");
  assert_eq!(config.locale_cookie, "NEXT_LOCALE");
  assert_eq!(config.server_set_cookie, ServerSetCookie::Always);
  assert!(!config.prefix_default);
}

#[test]
fn parse_full_config() {
  let file = parse(
    r#"
[router]
locales = ["en", "de", "jp"]
default_locale = "de"
prefix_default = true
base_path = "/docs"
locale_cookie = "lang"
locale_detector = false
server_set_cookie = "if-empty"
permanent_redirect = true

[router.cookie_options]
max_age = 3600
same_site = "strict"
secure = true
domain = "example.com"

[rewrites]
style = "glob"
out = "rewrites.json"
"#,
  );
  assert_eq!(file.rewrites.style, RuleStyle::Glob);
  assert_eq!(file.rewrites.out.as_deref(), Some("rewrites.json"));

  let config = file.locale_config().unwrap();
  assert!(config.prefix_default);
  assert!(config.permanent_redirect);
  assert_eq!(config.base_path, "/docs");
  assert_eq!(config.locale_cookie, "lang");
  assert!(matches!(config.locale_detector, locale_router::LocaleDetector::Disabled));
  assert_eq!(config.server_set_cookie, ServerSetCookie::IfEmpty);
  assert_eq!(config.cookie_options.max_age, 3600);
  assert_eq!(config.cookie_options.same_site, SameSite::Strict);
  assert!(config.cookie_options.secure);
  assert_eq!(config.cookie_options.domain.as_deref(), Some("example.com"));
  assert_eq!(config.cookie_options.path, None);
}

#[test]
fn missing_router_section() {
  assert_eq!(config_error("[rewrites]\nstyle = \"named\"\n"), "i18n_router requires a config argument.");
}

#[test]
fn locales_must_be_array() {
  let msg = config_error(
    r#"
[router]
locales = "en"
default_locale = "en"
"#,
  );
  assert!(msg.contains("locales"), "{msg}");
}

#[test]
fn default_locale_must_be_listed() {
  let msg = config_error(
    r#"
[router]
locales = ["en"]
default_locale = "fr"
"#,
  );
  assert!(msg.contains("default_locale"), "{msg}");
}

#[test]
fn detector_cannot_be_enabled_from_file() {
  let msg = config_error(
    r#"
[router]
locales = ["en"]
default_locale = "en"
locale_detector = true
"#,
  );
  assert!(msg.contains("locale_detector"), "{msg}");
}

#[test]
fn cookie_options_must_be_table() {
  let msg = config_error(
    r#"
[router]
locales = ["en"]
default_locale = "en"
cookie_options = "none"
"#,
  );
  assert!(msg.contains("cookie_options"), "{msg}");
}

#[test]
fn server_set_cookie_enumerated() {
  let msg = config_error(
    r#"
[router]
locales = ["en"]
default_locale = "en"
server_set_cookie = "sometimes"
"#,
  );
  assert!(msg.contains("server_set_cookie"), "{msg}");
}

#[test]
fn unknown_rule_style_is_a_parse_error() {
  let result: Result<RouterFile, _> = toml::from_str("[rewrites]\nstyle = \"regex\"\n");
  assert!(result.is_err());
}
