/* src/server/core/rust/src/diagnostics.rs */

use std::fmt;
use std::sync::Arc;

/// Non-fatal policy corrections made while resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
  /// A custom detector returned something outside `locales`; the default was used.
  InvalidDetectorLocale { returned: String },
  /// A custom detector panicked; the default was used.
  DetectorPanicked,
  /// The negotiator returned something outside `locales`; the default was used.
  InvalidNegotiatedLocale { returned: String },
  /// The negotiator panicked; the default was used.
  NegotiatorPanicked,
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidDetectorLocale { returned } => write!(
        f,
        "the locale detector must return a locale included in 'locales' (got \"{returned}\"); reverting to default_locale"
      ),
      Self::InvalidNegotiatedLocale { returned } => write!(
        f,
        "the negotiator must return a locale included in 'locales' (got \"{returned}\"); reverting to default_locale"
      ),
      Self::DetectorPanicked => f.write_str("the locale detector panicked; reverting to default_locale"),
      Self::NegotiatorPanicked => f.write_str("the negotiator panicked; reverting to default_locale"),
    }
  }
}

pub trait DiagnosticSink: Send + Sync {
  fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  fn report(&self, diagnostic: &Diagnostic) {
    self(diagnostic);
  }
}

/// Default sink: forwards every diagnostic to `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    tracing::warn!(target: "locale_router", "{diagnostic}");
  }
}

pub type SharedSink = Arc<dyn DiagnosticSink>;

pub fn default_sink() -> SharedSink {
  Arc::new(TracingSink)
}
