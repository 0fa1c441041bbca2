//! [`SqliteStore`]: the SQLite implementation of [`FootprintStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use footprint_core::{
  calculation::CalculationRecord,
  contact::ContactMessage,
  store::FootprintStore,
  user::User,
};

use crate::{
  Result,
  encode::{RawCalculation, RawUser, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const USER_COLUMNS: &str = "user_id, name, email, password_hash, created_at";

const CALCULATION_COLUMNS: &str = "calculation_id, user_id, transport_mode, weekly_distance,
   electricity_bill, diet_type, home_size, flights_per_year, recycling_habits,
   trees_planted, total_score, category, tip, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A footprint store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Look up a single user by an indexed column.
  async fn find_user_where(
    &self,
    column: &'static str,
    value: String,
  ) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1"),
              rusqlite::params![value],
              RawUser::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}

// ─── FootprintStore impl ─────────────────────────────────────────────────────

impl FootprintStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn insert_user(&self, user: User) -> Result<User> {
    let id_str   = encode_uuid(user.user_id);
    let name     = user.name.clone();
    let email    = user.email.clone();
    let hash     = user.password_hash.clone();
    let at_str   = encode_dt(user.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, name, email, password_hash, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, email, hash, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn find_user_by_email<'a>(&'a self, email: &'a str) -> Result<Option<User>> {
    self.find_user_where("email", email.to_owned()).await
  }

  async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
    self.find_user_where("user_id", encode_uuid(id)).await
  }

  // ── Calculations (append-only) ─────────────────────────────────────

  async fn insert_calculation(&self, record: CalculationRecord) -> Result<CalculationRecord> {
    let id_str      = encode_uuid(record.calculation_id);
    let user_id_str = encode_uuid(record.user_id);
    let input       = record.input.clone();
    let total       = record.total_score;
    let category    = record.category.as_str();
    let tip         = record.tip.clone();
    let at_str      = encode_dt(record.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO calculations (
             calculation_id, user_id, transport_mode, weekly_distance,
             electricity_bill, diet_type, home_size, flights_per_year,
             recycling_habits, trees_planted, total_score, category, tip,
             created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
          rusqlite::params![
            id_str,
            user_id_str,
            input.transport_mode,
            input.weekly_distance,
            input.electricity_bill,
            input.diet_type,
            input.home_size,
            input.flights_per_year,
            input.recycling_habits,
            input.trees_planted,
            total,
            category,
            tip,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_calculations_by_user(&self, user_id: Uuid) -> Result<Vec<CalculationRecord>> {
    let user_id_str = encode_uuid(user_id);

    let raws: Vec<RawCalculation> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CALCULATION_COLUMNS}
           FROM calculations
           WHERE user_id = ?1
           ORDER BY created_at DESC, rowid DESC"
        ))?;

        let rows = stmt
          .query_map(rusqlite::params![user_id_str], RawCalculation::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCalculation::into_record).collect()
  }

  // ── Contact ───────────────────────────────────────────────────────────────

  async fn insert_contact(&self, message: ContactMessage) -> Result<ContactMessage> {
    let id_str  = encode_uuid(message.contact_id);
    let name    = message.name.clone();
    let email   = message.email.clone();
    let subject = message.subject.clone();
    let body    = message.message.clone();
    let at_str  = encode_dt(message.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (contact_id, name, email, subject, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, name, email, subject, body, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(message)
  }
}
