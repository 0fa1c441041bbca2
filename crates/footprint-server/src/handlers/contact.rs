//! Handler for `POST /contact`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use footprint_core::{Error as CoreError, contact::NewContactMessage, store::FootprintStore};
use serde_json::json;

use crate::{AppState, error::ApiError};

/// `POST /contact`, body: `{"name", "email", "subject", "message"}`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FootprintStore + Clone + 'static,
{
  let Json(body) = payload?;
  let message = body.into_message()?;
  let stored = state
    .store
    .insert_contact(message)
    .await
    .map_err(CoreError::store)?;

  tracing::info!(contact_id = %stored.contact_id, "received contact message");
  Ok((
    StatusCode::CREATED,
    Json(json!({ "message": "Contact form submitted successfully!" })),
  ))
}
