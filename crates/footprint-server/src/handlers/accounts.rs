//! Handlers for `/register` and `/login`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use footprint_core::{
  auth::{Registration, Session},
  store::FootprintStore,
  user::PublicUser,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Response body shared by register and login.
#[derive(Debug, Serialize)]
pub struct SessionBody {
  pub message: &'static str,
  pub token:   String,
  pub user:    PublicUser,
}

impl SessionBody {
  fn new(message: &'static str, session: Session) -> Self {
    Self { message, token: session.token, user: session.user }
  }
}

// ─── Register ─────────────────────────────────────────────────────────────────

/// `POST /register`, body: `{"name", "email", "password"}`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<Registration>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FootprintStore + Clone + 'static,
{
  let Json(registration) = payload?;
  let session = state
    .authority
    .register(state.store.as_ref(), registration)
    .await?;
  Ok((
    StatusCode::CREATED,
    Json(SessionBody::new("User created successfully!", session)),
  ))
}

// ─── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

/// `POST /login`, body: `{"email", "password"}`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  payload: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<SessionBody>, ApiError>
where
  S: FootprintStore + Clone + 'static,
{
  let Json(body) = payload?;
  let session = state
    .authority
    .login(state.store.as_ref(), &body.email, &body.password)
    .await?;
  Ok(Json(SessionBody::new("Login successful!", session)))
}
