//! Handler for `POST /calculate`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use footprint_core::{
  lifestyle::LifestyleInput,
  records,
  scoring::{self, ScoreResult},
  store::FootprintStore,
};

use crate::{AppState, auth::AuthenticatedUser, error::ApiError};

/// `POST /calculate`, body: [`LifestyleInput`] (camelCase).
///
/// Scores the answers, appends the result to the caller's history and returns
/// `{totalScore, category, tip, breakdown}`.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  AuthenticatedUser(principal): AuthenticatedUser,
  payload: Result<Json<LifestyleInput>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError>
where
  S: FootprintStore + Clone + 'static,
{
  let Json(input) = payload?;
  input.validate()?;

  let result = scoring::score(&input, &mut rand::thread_rng())?;
  let record =
    records::append_record(state.store.as_ref(), &principal, input, &result).await?;

  tracing::debug!(
    user_id = %principal.id(),
    calculation_id = %record.calculation_id,
    total = result.total_score,
    "stored calculation"
  );
  Ok(Json(result))
}
