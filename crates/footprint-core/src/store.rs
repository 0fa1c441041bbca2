//! The `FootprintStore` trait.
//!
//! Implemented by storage backends (e.g. `footprint-store-sqlite`). The
//! credential authority, record access and the server depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{calculation::CalculationRecord, contact::ContactMessage, user::User};

/// Backend errors must say whether they were caused by a uniqueness
/// violation so duplicate registrations can be reported as such.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn is_conflict(&self) -> bool;
}

/// Abstraction over a footprint store backend.
///
/// All writes are single-record inserts; nothing is ever updated or deleted.
/// Lookups report absence as `Ok(None)`, distinct from a storage failure.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait FootprintStore: Send + Sync {
  type Error: StoreError;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. Fails with a conflict error if the email is taken.
  fn insert_user(
    &self,
    user: User,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  fn find_user_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  // ── Calculations ──────────────────────────────────────────────────────

  /// Append a calculation record. All-or-nothing.
  fn insert_calculation(
    &self,
    record: CalculationRecord,
  ) -> impl Future<Output = Result<CalculationRecord, Self::Error>> + Send + '_;

  /// All records owned by `user_id`, newest first.
  fn list_calculations_by_user(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Vec<CalculationRecord>, Self::Error>> + Send + '_;

  // ── Contact ───────────────────────────────────────────────────────────

  fn insert_contact(
    &self,
    message: ContactMessage,
  ) -> impl Future<Output = Result<ContactMessage, Self::Error>> + Send + '_;
}
