//! API error type and axum `IntoResponse` implementation.
//!
//! Every authentication failure collapses into the same 401 body; the
//! specific reason is only logged.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use footprint_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] CoreError),

  /// The request body was missing, not JSON, or did not match the expected
  /// shape.
  #[error("bad request: {0}")]
  BadRequest(String),
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

fn body(status: StatusCode, message: &str) -> Response {
  (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let e = match self {
      ApiError::BadRequest(msg) => return body(StatusCode::BAD_REQUEST, &msg),
      ApiError::Core(e) => e,
    };

    if e.is_auth_failure() {
      tracing::warn!(reason = %e, "rejected authentication");
      let mut res = body(StatusCode::UNAUTHORIZED, "unauthorized");
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Bearer"),
      );
      return res;
    }

    match e {
      CoreError::Validation(msg) => body(StatusCode::BAD_REQUEST, &msg),
      CoreError::DuplicateIdentity(_) => {
        body(StatusCode::CONFLICT, "a user with this email already exists")
      }
      other => {
        tracing::error!(error = %other, "request failed");
        body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
      }
    }
  }
}
