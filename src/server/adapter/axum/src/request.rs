/* src/server/adapter/axum/src/request.rs */

use axum::http::header::{COOKIE, HOST};
use axum::http::uri::Authority;
use axum::http::{HeaderMap, Uri};
use locale_router::{LocaleRequest, parse_cookie, strip_base_path};

/// Borrowed view of an incoming request in the shape the core expects.
pub struct HttpRequestView<'a> {
  pathname: &'a str,
  query: &'a str,
  base_url: String,
  headers: &'a HeaderMap,
}

impl<'a> HttpRequestView<'a> {
  pub fn new(uri: &'a Uri, headers: &'a HeaderMap, base_path: &str) -> Self {
    let pathname = strip_base_path(uri.path(), base_path);
    let query = uri.query().unwrap_or("");
    Self { pathname, query, base_url: request_origin(uri, headers), headers }
  }
}

/// `scheme://host/` from the URI authority or the Host header; empty when
/// neither names a host.
fn request_origin(uri: &Uri, headers: &HeaderMap) -> String {
  let host = uri
    .authority()
    .map(Authority::as_str)
    .or_else(|| headers.get(HOST).and_then(|v| v.to_str().ok()))
    .filter(|h| !h.is_empty());
  match host {
    Some(host) => format!("{}://{host}/", uri.scheme_str().unwrap_or("http")),
    None => String::new(),
  }
}

impl LocaleRequest for HttpRequestView<'_> {
  fn pathname(&self) -> &str {
    self.pathname
  }

  fn query_string(&self) -> &str {
    self.query
  }

  fn base_url(&self) -> &str {
    &self.base_url
  }

  fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|v| v.to_str().ok())
  }

  fn headers(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
    Box::new(self.headers.iter().filter_map(|(k, v)| Some((k.as_str(), v.to_str().ok()?))))
  }

  // Browsers may split cookies over several headers under HTTP/2.
  fn cookie(&self, name: &str) -> Option<&str> {
    self
      .headers
      .get_all(COOKIE)
      .iter()
      .filter_map(|v| v.to_str().ok())
      .find_map(|header| parse_cookie(header, name))
  }
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (k, v) in pairs {
      map.append(*k, HeaderValue::from_static(*v));
    }
    map
  }

  #[test]
  fn strips_base_path_and_splits_query() {
    let uri: Uri = "/docs/jp/faq?a=1".parse().unwrap();
    let map = headers(&[("host", "example.com")]);
    let view = HttpRequestView::new(&uri, &map, "/docs");
    assert_eq!(view.pathname(), "/jp/faq");
    assert_eq!(view.query_string(), "a=1");
    assert_eq!(view.base_url(), "http://example.com/");
  }

  #[test]
  fn absolute_uri_wins_over_host() {
    let uri: Uri = "https://example.org/faq".parse().unwrap();
    let map = headers(&[("host", "other.test")]);
    assert_eq!(HttpRequestView::new(&uri, &map, "").base_url(), "https://example.org/");
  }

  #[test]
  fn no_host_means_no_base_url() {
    let uri: Uri = "/faq".parse().unwrap();
    let map = HeaderMap::new();
    assert_eq!(HttpRequestView::new(&uri, &map, "").base_url(), "");
  }

  #[test]
  fn cookies_across_headers() {
    let uri: Uri = "/".parse().unwrap();
    let map = headers(&[("cookie", "a=1"), ("cookie", "NEXT_LOCALE=jp")]);
    let view = HttpRequestView::new(&uri, &map, "");
    assert_eq!(view.cookie("NEXT_LOCALE"), Some("jp"));
    assert_eq!(view.cookie("missing"), None);
    assert_eq!(view.headers().count(), 2);
  }
}
