/* src/server/core/rust/src/negotiate.rs */

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use fluent_langneg::{NegotiationStrategy, negotiate_languages};
use unic_langid::LanguageIdentifier;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Best-fit matcher between client preferences and the configured locales.
/// Returning `None`, or a value outside `available`, means "no usable match".
pub trait Negotiator: Send + Sync {
  fn negotiate(&self, preferences: &[String], available: &[String], fallback: &str)
  -> Option<String>;
}

impl fmt::Debug for dyn Negotiator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Negotiator")
  }
}

/// RFC 4647 lookup via `fluent-langneg`: `en-US` finds `en`, `en` finds `en-US`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFitNegotiator;

impl Negotiator for BestFitNegotiator {
  fn negotiate(
    &self,
    preferences: &[String],
    available: &[String],
    fallback: &str,
  ) -> Option<String> {
    let requested: Vec<LanguageIdentifier> =
      preferences.iter().filter(|p| p.as_str() != "*").filter_map(|p| p.parse().ok()).collect();

    // Keep the original spelling of each configured locale next to its parsed id.
    let mut originals = Vec::new();
    let mut parsed = Vec::new();
    for locale in available {
      if let Ok(id) = locale.parse::<LanguageIdentifier>() {
        originals.push(locale);
        parsed.push(id);
      }
    }

    let matched = negotiate_languages(&requested, &parsed, None, NegotiationStrategy::Lookup);
    let Some(first) = matched.first() else {
      return Some(fallback.to_string());
    };
    parsed.iter().position(|id| id == *first).map(|idx| originals[idx].clone())
  }
}

/// Parse an Accept-Language header into tags, highest q first.
/// Entries with `q=0` are refused by the client and dropped; a q that is not
/// a number in `[0, 1]` reads as 1.
pub fn preferred_languages(header: Option<&str>) -> Vec<String> {
  let Some(header) = header else {
    return Vec::new();
  };

  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    if lang.is_empty() {
      continue;
    }
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=")
        && let Ok(v) = val.trim().parse::<f64>()
        && (0.0..=1.0).contains(&v)
      {
        q = v;
      }
    }
    if q <= 0.0 {
      continue;
    }
    entries.push((lang, q));
  }

  // sort_by is stable: equal q keeps header order
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
  entries.into_iter().map(|(lang, _)| lang.to_string()).collect()
}

/// Negotiate a locale from an Accept-Language header. Never fails: an empty
/// or wildcard-only preference list, a panicking negotiator, or a result
/// outside `locales` all resolve to `default_locale`.
pub fn resolve_preferred(
  accept_language: Option<&str>,
  locales: &[String],
  default_locale: &str,
  negotiator: &dyn Negotiator,
  sink: &dyn DiagnosticSink,
) -> String {
  let preferences = preferred_languages(accept_language);
  if preferences.is_empty() || (preferences.len() == 1 && preferences[0] == "*") {
    return default_locale.to_string();
  }

  let outcome =
    catch_unwind(AssertUnwindSafe(|| negotiator.negotiate(&preferences, locales, default_locale)));
  match outcome {
    Ok(Some(locale)) if locales.contains(&locale) => locale,
    Ok(Some(returned)) => {
      sink.report(&Diagnostic::InvalidNegotiatedLocale { returned });
      default_locale.to_string()
    }
    Ok(None) => default_locale.to_string(),
    Err(_) => {
      sink.report(&Diagnostic::NegotiatorPanicked);
      default_locale.to_string()
    }
  }
}
