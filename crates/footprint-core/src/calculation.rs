//! Calculation records: the persisted, immutable output of a scoring call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{lifestyle::LifestyleInput, scoring::Category};

/// One scoring result owned by one user. Once written, no field is ever
/// updated and the record is never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
  pub calculation_id: Uuid,
  pub user_id:        Uuid,
  /// Snapshot of the answers that produced this score.
  pub input:          LifestyleInput,
  pub total_score:    f64,
  pub category:       Category,
  pub tip:            String,
  /// Server-assigned; never changes after creation.
  pub created_at:     DateTime<Utc>,
}
