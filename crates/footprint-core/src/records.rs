//! Record access: appending and listing a principal's own calculations.
//!
//! Both operations take a [`Principal`] rather than a bare id, so records can
//! only be written or read on behalf of a user resolved from a valid token.

use chrono::Utc;
use uuid::Uuid;

use crate::{
  Error, Result,
  calculation::CalculationRecord,
  lifestyle::LifestyleInput,
  scoring::ScoreResult,
  store::FootprintStore,
  user::Principal,
};

/// Persist `result` as a new record owned by `owner`.
pub async fn append_record<S: FootprintStore>(
  store: &S,
  owner: &Principal,
  input: LifestyleInput,
  result: &ScoreResult,
) -> Result<CalculationRecord> {
  let record = CalculationRecord {
    calculation_id: Uuid::new_v4(),
    user_id:        owner.id(),
    input,
    total_score:    result.total_score,
    category:       result.category,
    tip:            result.tip.clone(),
    created_at:     Utc::now(),
  };
  store.insert_calculation(record).await.map_err(Error::store)
}

/// Every record owned by `owner`, newest first.
pub async fn list_records<S: FootprintStore>(
  store: &S,
  owner: &Principal,
) -> Result<Vec<CalculationRecord>> {
  store
    .list_calculations_by_user(owner.id())
    .await
    .map_err(Error::store)
}
