/* src/server/adapter/axum/src/middleware.rs */

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use locale_router::{LocaleRouter, Routed, RouterDecision, within_base_path};

use crate::error::AxumError;
use crate::request::HttpRequestView;

/// Run the router ahead of application routing and materialize its decision.
/// Requests outside the configured base path are forwarded untouched.
pub(crate) async fn route_request(
  State(router): State<LocaleRouter>,
  mut request: Request,
  next: Next,
) -> Response {
  if within_base_path(request.uri().path(), &router.config().base_path).is_none() {
    return next.run(request).await;
  }

  let routed = {
    let view = HttpRequestView::new(request.uri(), request.headers(), &router.config().base_path);
    router.route(&view)
  };

  if let Some(status) = routed.status() {
    return match redirect_response(status, &routed) {
      Ok(response) => response,
      Err(e) => e.into_response(),
    };
  }

  if let RouterDecision::Rewrite { ref path, .. } = routed.decision {
    match rewrite_uri(request.uri(), path) {
      Ok(uri) => *request.uri_mut() = uri,
      Err(e) => return e.into_response(),
    }
  }

  if let Some((name, locale)) = routed.locale_header() {
    match HeaderValue::from_str(locale) {
      Ok(value) => {
        request.headers_mut().insert(name, value);
      }
      Err(_) => tracing::warn!(target: "locale_router", locale, "locale is not a valid header value"),
    }
  }

  let mut response = next.run(request).await;
  apply_headers(response.headers_mut(), &routed);
  response
}

fn redirect_response(status: u16, routed: &Routed) -> Result<Response, AxumError> {
  let status = StatusCode::from_u16(status).map_err(|e| AxumError::internal(e.to_string()))?;
  let mut response = Response::new(Body::empty());
  *response.status_mut() = status;
  apply_headers(response.headers_mut(), routed);
  Ok(response)
}

fn rewrite_uri(current: &Uri, target: &str) -> Result<Uri, AxumError> {
  let path_and_query: PathAndQuery =
    target.parse().map_err(|_| AxumError::internal(format!("invalid rewrite target '{target}'")))?;
  let mut parts = current.clone().into_parts();
  parts.path_and_query = Some(path_and_query);
  Uri::from_parts(parts).map_err(|e| AxumError::internal(e.to_string()))
}

fn apply_headers(headers: &mut HeaderMap, routed: &Routed) {
  for (name, value) in routed.response_headers() {
    let Ok(value) = HeaderValue::from_str(&value) else {
      tracing::warn!(target: "locale_router", header = name, "dropping invalid header value");
      continue;
    };
    let name = HeaderName::from_static(name);
    if name == SET_COOKIE {
      headers.append(name, value);
    } else {
      headers.insert(name, value);
    }
  }
}
