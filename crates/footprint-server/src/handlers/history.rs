//! Handler for `GET /history`.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use footprint_core::{
  calculation::CalculationRecord,
  records,
  scoring::Category,
  store::FootprintStore,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{AppState, auth::AuthenticatedUser, error::ApiError};

/// One row of the caller's history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
  pub id:          Uuid,
  pub date:        DateTime<Utc>,
  pub total_score: f64,
  pub category:    Category,
  pub tip:         String,
}

impl From<CalculationRecord> for HistoryEntry {
  fn from(r: CalculationRecord) -> Self {
    Self {
      id:          r.calculation_id,
      date:        r.created_at,
      total_score: r.total_score,
      category:    r.category,
      tip:         r.tip,
    }
  }
}

/// `GET /history`: the caller's own records, newest first.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  AuthenticatedUser(principal): AuthenticatedUser,
) -> Result<Json<Vec<HistoryEntry>>, ApiError>
where
  S: FootprintStore + Clone + 'static,
{
  let records = records::list_records(state.store.as_ref(), &principal).await?;
  Ok(Json(records.into_iter().map(HistoryEntry::from).collect()))
}
