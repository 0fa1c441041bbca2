//! Error types for `footprint-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("a user with email {0:?} already exists")]
  DuplicateIdentity(String),

  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("token missing")]
  MissingToken,

  #[error("malformed token: {0}")]
  MalformedToken(String),

  #[error("token expired")]
  ExpiredToken,

  #[error("token refers to unknown principal {0}")]
  UnknownPrincipal(Uuid),

  #[error("validation error: {0}")]
  Validation(String),

  #[error("store unavailable: {0}")]
  StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("configuration error: {0}")]
  Configuration(String),

  #[error("password hashing failed: {0}")]
  Hashing(String),

  #[error("token encoding failed: {0}")]
  TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

impl Error {
  /// Wrap a backend failure.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::StoreUnavailable(Box::new(e))
  }

  /// Whether this is one of the authentication failures that callers must
  /// collapse into a single "unauthorized" signal.
  pub fn is_auth_failure(&self) -> bool {
    matches!(
      self,
      Self::InvalidCredentials
        | Self::MissingToken
        | Self::MalformedToken(_)
        | Self::ExpiredToken
        | Self::UnknownPrincipal(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
