/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod current;
pub mod decision;
pub mod diagnostics;
pub mod errors;
pub mod matcher;
pub mod negotiate;
pub mod request;
pub mod resolver;
pub mod rewrites;
pub mod router;
pub mod validate;

// Re-exports for ergonomic use
pub use config::{
  CookieOptions, DEFAULT_COOKIE_MAX_AGE, DEFAULT_LOCALE_COOKIE, DetectorFn, LocaleConfig,
  LocaleDetector, SameSite, ServerSetCookie,
};
pub use current::{CurrentLocaleInput, cookie_value, current_locale, locale_from_header};
pub use decision::{
  CookieWrite, LOCALE_HEADER, PERMANENT_REDIRECT, Routed, RouterDecision, TEMPORARY_REDIRECT,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, SharedSink, TracingSink};
pub use errors::{ConfigError, RouterError};
pub use matcher::{PathMatch, match_path_locale, strip_base_path, within_base_path};
pub use negotiate::{BestFitNegotiator, Negotiator, preferred_languages};
pub use request::{LocaleRequest, StaticRequest, parse_cookie};
pub use resolver::resolve_locale;
pub use rewrites::{RewriteRule, WildcardStyle, i18n_rewrites, i18n_rewrites_with};
pub use router::{LocaleRouter, i18n_router};
pub use validate::validate_config;
