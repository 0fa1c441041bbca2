//! Lifestyle input: the request-scoped questionnaire answers fed to the
//! scoring engine.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One submission of lifestyle answers.
///
/// Categorical fields are kept as free strings: values missing from the
/// factor table fall back to defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInput {
  /// Kilometres travelled per week.
  pub weekly_distance:  f64,
  pub transport_mode:   String,
  /// Monthly electricity spend.
  pub electricity_bill: f64,
  pub diet_type:        String,
  pub home_size:        String,
  pub flights_per_year: u32,
  /// `never` | `sometimes` | `always`
  pub recycling_habits: String,
  pub trees_planted:    u32,
}

impl LifestyleInput {
  /// Reject numeric fields that the type system alone lets through.
  pub fn validate(&self) -> Result<()> {
    check_amount("weeklyDistance", self.weekly_distance)?;
    check_amount("electricityBill", self.electricity_bill)?;
    Ok(())
  }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
  if !value.is_finite() {
    return Err(Error::Validation(format!("{field} must be a finite number")));
  }
  if value < 0.0 {
    return Err(Error::Validation(format!("{field} must not be negative")));
  }
  Ok(())
}
