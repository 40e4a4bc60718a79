/* src/server/core/rust/src/decision.rs */

use serde::Serialize;

use crate::config::SameSite;

/// Header carrying the resolved locale past the router.
pub const LOCALE_HEADER: &str = "x-next-i18n-router-locale";

pub const TEMPORARY_REDIRECT: u16 = 307;
pub const PERMANENT_REDIRECT: u16 = 301;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouterDecision {
  /// Continue with the request unchanged.
  PassThrough { locale: String },
  /// Serve `path` internally; the client-visible URL is unchanged.
  Rewrite { path: String, locale: String },
  /// Send the client to `url`.
  Redirect { url: String, permanent: bool, locale: String },
}

impl RouterDecision {
  pub fn locale(&self) -> &str {
    match self {
      Self::PassThrough { locale } | Self::Rewrite { locale, .. } | Self::Redirect { locale, .. } => {
        locale
      }
    }
  }

  pub fn is_redirect(&self) -> bool {
    matches!(self, Self::Redirect { .. })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieWrite {
  pub name: String,
  pub value: String,
  pub path: String,
  pub max_age: u64,
  pub same_site: SameSite,
  pub secure: bool,
  pub http_only: bool,
  pub domain: Option<String>,
}

impl CookieWrite {
  /// Render as a `Set-Cookie` header value.
  pub fn to_header_value(&self) -> String {
    let mut out = format!(
      "{}={}; Path={}; Max-Age={}; SameSite={}",
      self.name,
      self.value,
      self.path,
      self.max_age,
      self.same_site.as_str()
    );
    if let Some(ref domain) = self.domain {
      out.push_str("; Domain=");
      out.push_str(domain);
    }
    if self.secure {
      out.push_str("; Secure");
    }
    if self.http_only {
      out.push_str("; HttpOnly");
    }
    out
  }
}

/// One router outcome: the decision plus the cookie to persist, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routed {
  pub decision: RouterDecision,
  pub cookie: Option<CookieWrite>,
}

impl Routed {
  pub fn new(decision: RouterDecision) -> Self {
    Self { decision, cookie: None }
  }

  pub fn with_cookie(mut self, cookie: Option<CookieWrite>) -> Self {
    self.cookie = cookie;
    self
  }

  pub fn locale(&self) -> &str {
    self.decision.locale()
  }

  /// HTTP status for redirects; `None` when the request continues downstream.
  pub fn status(&self) -> Option<u16> {
    match self.decision {
      RouterDecision::Redirect { permanent: true, .. } => Some(PERMANENT_REDIRECT),
      RouterDecision::Redirect { permanent: false, .. } => Some(TEMPORARY_REDIRECT),
      _ => None,
    }
  }

  /// Locale marker for downstream handlers. A redirect is a bare relocation
  /// and carries none.
  pub fn locale_header(&self) -> Option<(&'static str, &str)> {
    if self.decision.is_redirect() { None } else { Some((LOCALE_HEADER, self.locale())) }
  }

  /// Every response header the outcome implies, in emission order.
  pub fn response_headers(&self) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if let RouterDecision::Redirect { ref url, .. } = self.decision {
      headers.push(("location", url.clone()));
    }
    if let Some((name, value)) = self.locale_header() {
      headers.push((name, value.to_string()));
    }
    if let Some(ref cookie) = self.cookie {
      headers.push(("set-cookie", cookie.to_header_value()));
    }
    headers
  }
}
