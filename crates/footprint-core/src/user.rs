//! Users, the principals that own calculation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as held by the store.
///
/// Deliberately not `Serialize`: the password hash must never leave the
/// process. Use [`User::public`] for anything that crosses the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub user_id:       Uuid,
  pub name:          String,
  /// Unique across all users.
  pub email:         String,
  /// argon2 PHC string, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub created_at:    DateTime<Utc>,
}

impl User {
  pub fn public(&self) -> PublicUser {
    PublicUser {
      id:    self.user_id,
      name:  self.name.clone(),
      email: self.email.clone(),
    }
  }
}

/// The outward-facing fields of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
  pub id:    Uuid,
  pub name:  String,
  pub email: String,
}

/// A user resolved from a verified token.
///
/// Only [`crate::auth::CredentialAuthority`] can construct one, so holding a
/// `Principal` proves the caller presented a valid token for this user.
#[derive(Debug, Clone)]
pub struct Principal {
  user: User,
}

impl Principal {
  pub(crate) fn new(user: User) -> Self { Self { user } }

  pub fn id(&self) -> Uuid { self.user.user_id }

  pub fn user(&self) -> &User { &self.user }

  pub fn public(&self) -> PublicUser { self.user.public() }
}
