/* src/server/core/rust/src/resolver.rs */

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::config::{LocaleConfig, LocaleDetector};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::negotiate::resolve_preferred;
use crate::request::LocaleRequest;

/// The locale cookie's value, if it names a configured locale.
pub fn cookie_locale<'r>(request: &'r dyn LocaleRequest, config: &LocaleConfig) -> Option<&'r str> {
  let name = config.cookie_name()?;
  request.cookie(name).filter(|v| !v.is_empty() && config.is_locale(v))
}

/// Effective locale for a request whose path carries none.
///
/// Order: valid cookie, then the detector (custom, negotiation, or disabled),
/// then `default_locale`. The result is always a member of `locales`.
pub fn resolve_locale(
  request: &dyn LocaleRequest,
  config: &LocaleConfig,
  sink: &dyn DiagnosticSink,
) -> String {
  if let Some(locale) = cookie_locale(request, config) {
    return locale.to_string();
  }
  detect_locale(request, config, sink)
}

/// Detector step alone, with the cookie already ruled out.
pub fn detect_locale(
  request: &dyn LocaleRequest,
  config: &LocaleConfig,
  sink: &dyn DiagnosticSink,
) -> String {
  match config.locale_detector {
    LocaleDetector::Disabled => config.default_locale.clone(),
    LocaleDetector::Negotiate => resolve_preferred(
      request.header("accept-language"),
      &config.locales,
      &config.default_locale,
      config.negotiator.as_ref(),
      sink,
    ),
    LocaleDetector::Custom(ref detector) => {
      match catch_unwind(AssertUnwindSafe(|| detector(request, config))) {
        Ok(locale) if config.is_locale(&locale) => locale,
        Ok(returned) => {
          sink.report(&Diagnostic::InvalidDetectorLocale { returned });
          config.default_locale.clone()
        }
        Err(_) => {
          sink.report(&Diagnostic::DetectorPanicked);
          config.default_locale.clone()
        }
      }
    }
  }
}
