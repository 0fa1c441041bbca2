//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microseconds, `Z`
//! suffix) so lexical order equals chronological order. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use footprint_core::{
  calculation::CalculationRecord,
  lifestyle::LifestyleInput,
  scoring::Category,
  user::User,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Category ────────────────────────────────────────────────────────────────

pub fn decode_category(s: &str) -> Result<Category> {
  match s {
    "good" => Ok(Category::Good),
    "bad" => Ok(Category::Bad),
    other => Err(Error::Corrupt { column: "category", value: other.to_owned() }),
  }
}

fn decode_count(column: &'static str, v: i64) -> Result<u32> {
  u32::try_from(v).map_err(|_| Error::Corrupt { column, value: v.to_string() })
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub name:          String,
  pub email:         String,
  pub password_hash: String,
  pub created_at:    String,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:       row.get(0)?,
      name:          row.get(1)?,
      email:         row.get(2)?,
      password_hash: row.get(3)?,
      created_at:    row.get(4)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:       decode_uuid(&self.user_id)?,
      name:          self.name,
      email:         self.email,
      password_hash: self.password_hash,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `calculations` row.
pub struct RawCalculation {
  pub calculation_id:   String,
  pub user_id:          String,
  pub transport_mode:   String,
  pub weekly_distance:  f64,
  pub electricity_bill: f64,
  pub diet_type:        String,
  pub home_size:        String,
  pub flights_per_year: i64,
  pub recycling_habits: String,
  pub trees_planted:    i64,
  pub total_score:      f64,
  pub category:         String,
  pub tip:              String,
  pub created_at:       String,
}

impl RawCalculation {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      calculation_id:   row.get(0)?,
      user_id:          row.get(1)?,
      transport_mode:   row.get(2)?,
      weekly_distance:  row.get(3)?,
      electricity_bill: row.get(4)?,
      diet_type:        row.get(5)?,
      home_size:        row.get(6)?,
      flights_per_year: row.get(7)?,
      recycling_habits: row.get(8)?,
      trees_planted:    row.get(9)?,
      total_score:      row.get(10)?,
      category:         row.get(11)?,
      tip:              row.get(12)?,
      created_at:       row.get(13)?,
    })
  }

  pub fn into_record(self) -> Result<CalculationRecord> {
    Ok(CalculationRecord {
      calculation_id: decode_uuid(&self.calculation_id)?,
      user_id:        decode_uuid(&self.user_id)?,
      input:          LifestyleInput {
        weekly_distance:  self.weekly_distance,
        transport_mode:   self.transport_mode,
        electricity_bill: self.electricity_bill,
        diet_type:        self.diet_type,
        home_size:        self.home_size,
        flights_per_year: decode_count("flights_per_year", self.flights_per_year)?,
        recycling_habits: self.recycling_habits,
        trees_planted:    decode_count("trees_planted", self.trees_planted)?,
      },
      total_score:    self.total_score,
      category:       decode_category(&self.category)?,
      tip:            self.tip,
      created_at:     decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn timestamps_sort_lexically() {
    let whole = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let frac = whole + chrono::TimeDelta::microseconds(1);
    assert!(encode_dt(whole) < encode_dt(frac));
    assert_eq!(encode_dt(whole).len(), encode_dt(frac).len());
    assert_eq!(decode_dt(&encode_dt(frac)).unwrap(), frac);
  }

  #[test]
  fn unknown_category_is_corrupt() {
    assert!(matches!(decode_category("meh"), Err(Error::Corrupt { .. })));
  }
}
