/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use locale_router::RouterError;

/// Adapter failure rendered as the JSON error envelope.
#[derive(Debug)]
pub struct AxumError {
  status: StatusCode,
  code: &'static str,
  message: String,
}

impl AxumError {
  pub fn internal(message: impl Into<String>) -> Self {
    Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: "INTERNAL_ERROR", message: message.into() }
  }

  /// The locale marker is absent: the handler runs outside a localized router.
  pub fn missing_locale() -> Self {
    Self {
      status: StatusCode::INTERNAL_SERVER_ERROR,
      code: "LOCALE_MISSING",
      message: "No resolved locale on this request; wrap the router with `localized`".into(),
    }
  }

  pub fn status(&self) -> StatusCode {
    self.status
  }

  pub fn code(&self) -> &'static str {
    self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": self.code,
        "message": self.message,
        "transient": false,
      }
    });
    (self.status, axum::Json(body)).into_response()
  }
}

impl From<RouterError> for AxumError {
  fn from(err: RouterError) -> Self {
    Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: "CONFIG_ERROR", message: err.to_string() }
  }
}
