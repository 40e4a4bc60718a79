/* src/server/adapter/axum/src/extract.rs */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use locale_router::{LOCALE_HEADER, locale_from_header};

use crate::error::AxumError;

/// Locale resolved by the localized router for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CurrentLocale {
  type Rejection = AxumError;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let value = parts.headers.get(LOCALE_HEADER).and_then(|v| v.to_str().ok());
    locale_from_header(value)
      .map(|locale| Self(locale.to_string()))
      .ok_or_else(AxumError::missing_locale)
  }
}
