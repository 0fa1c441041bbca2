//! Bearer-token extractor.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use footprint_core::{Error as CoreError, store::FootprintStore, user::Principal};

use crate::{AppState, error::ApiError};

/// Present in a handler's arguments means the request carried a valid token;
/// wraps the user it resolved to.
pub struct AuthenticatedUser(pub Principal);

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// A missing header is `Ok(None)`; the authority reports it as a missing
/// token. Any other scheme is malformed.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, CoreError> {
  let Some(value) = headers.get(header::AUTHORIZATION) else {
    return Ok(None);
  };
  let value = value
    .to_str()
    .map_err(|_| CoreError::MalformedToken("authorization header is not ASCII".into()))?;

  match value.trim().split_once(' ') {
    Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(Some(token)),
    _ => Err(CoreError::MalformedToken("expected Bearer authorization".into())),
  }
}

impl<S> FromRequestParts<AppState<S>> for AuthenticatedUser
where
  S: FootprintStore + Clone + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_token(&parts.headers)?;
    let principal = state
      .authority
      .validate_token(state.store.as_ref(), token)
      .await?;
    Ok(AuthenticatedUser(principal))
  }
}
