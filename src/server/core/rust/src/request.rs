/* src/server/core/rust/src/request.rs */

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::RouterError;

/// The slice of an HTTP request the router needs. Adapters implement this
/// over their framework's request type.
pub trait LocaleRequest {
  /// Path below the base path, always starting with `/`.
  fn pathname(&self) -> &str;
  /// Raw query string without the leading `?`; empty when absent.
  fn query_string(&self) -> &str;
  /// Absolute URL of the request (`scheme://host/...`), empty when unknown.
  fn base_url(&self) -> &str;
  fn header(&self, name: &str) -> Option<&str>;
  fn headers(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
  fn cookie(&self, name: &str) -> Option<&str>;
}

/// Owned request, used by tests and the CLI to replay a request offline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticRequest {
  pub pathname: String,
  pub query: String,
  pub base_url: String,
  /// Header names are stored lower-cased.
  pub headers: BTreeMap<String, String>,
  pub cookies: BTreeMap<String, String>,
}

impl StaticRequest {
  pub fn new(pathname: impl Into<String>) -> Self {
    let pathname = pathname.into();
    let (path, query) = match pathname.split_once('?') {
      Some((p, q)) => (p.to_string(), q.to_string()),
      None => (pathname, String::new()),
    };
    Self { pathname: path, query, ..Self::default() }
  }

  /// Parse the JSON request form. `null` means the caller never supplied one.
  pub fn from_value(value: &serde_json::Value) -> Result<Self, RouterError> {
    if value.is_null() {
      return Err(RouterError::missing("route", "request"));
    }
    let mut req: Self = serde_json::from_value(value.clone()).map_err(|e| {
      crate::errors::ConfigError::InvalidField { field: "request".into(), message: e.to_string() }
    })?;
    req.headers = req.headers.into_iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect();
    if !req.pathname.starts_with('/') {
      req.pathname.insert(0, '/');
    }
    Ok(req)
  }

  pub fn with_query(mut self, query: impl Into<String>) -> Self {
    self.query = query.into();
    self
  }

  pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
    self.base_url = url.into();
    self
  }

  pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
    self.headers.insert(name.to_ascii_lowercase(), value.into());
    self
  }

  /// Accept-Language built the way browsers send it: listed tags at q=0.9.
  pub fn with_accept_languages(self, tags: &[&str]) -> Self {
    if tags.is_empty() {
      return self;
    }
    let value = format!("{};q=0.9", tags.join(","));
    self.with_header("accept-language", value)
  }

  pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.cookies.insert(name.into(), value.into());
    self
  }
}

impl LocaleRequest for StaticRequest {
  fn pathname(&self) -> &str {
    &self.pathname
  }

  fn query_string(&self) -> &str {
    &self.query
  }

  fn base_url(&self) -> &str {
    &self.base_url
  }

  fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  fn headers(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
    Box::new(self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())))
  }

  fn cookie(&self, name: &str) -> Option<&str> {
    self.cookies.get(name).map(String::as_str)
  }
}

/// Find `name` in a `Cookie` header (`a=1; b=2`). The first pair wins.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=') {
      if k.trim() == name {
        return Some(v.trim());
      }
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn new_splits_query() {
    let req = StaticRequest::new("/faq?x=1&y=2");
    assert_eq!(req.pathname(), "/faq");
    assert_eq!(req.query_string(), "x=1&y=2");
  }

  #[test]
  fn accept_languages_mimics_browser_header() {
    let req = StaticRequest::new("/").with_accept_languages(&["en-US", "en"]);
    assert_eq!(req.header("Accept-Language"), Some("en-US,en;q=0.9"));
  }

  #[test]
  fn headers_are_case_insensitive() {
    let req = StaticRequest::new("/").with_header("X-Custom", "1");
    assert_eq!(req.header("x-custom"), Some("1"));
    assert_eq!(req.headers().count(), 1);
  }

  #[test]
  fn from_value_reads_json_fixture() {
    let req = StaticRequest::from_value(&json!({
      "pathname": "jp/faq",
      "query": "a=1",
      "headers": {"Accept-Language": "jp"},
      "cookies": {"NEXT_LOCALE": "en"}
    }))
    .unwrap();
    assert_eq!(req.pathname(), "/jp/faq");
    assert_eq!(req.header("accept-language"), Some("jp"));
    assert_eq!(req.cookie("NEXT_LOCALE"), Some("en"));
  }

  #[test]
  fn from_value_null_is_missing_request() {
    let err = StaticRequest::from_value(&serde_json::Value::Null).unwrap_err();
    assert!(err.to_string().contains("request"));
  }

  #[test]
  fn parse_cookie_multiple_pairs() {
    assert_eq!(parse_cookie("other=1; NEXT_LOCALE=jp; foo=bar", "NEXT_LOCALE"), Some("jp"));
    assert_eq!(parse_cookie("lang=zh", "NEXT_LOCALE"), None);
    assert_eq!(parse_cookie("", "NEXT_LOCALE"), None);
  }
}
