//! The credential authority: password hashing, registration, login, and
//! bearer-token minting and validation.
//!
//! Tokens are HS256 JWTs carrying `{sub, iat, exp}` with `exp` as epoch
//! seconds. Nothing about a token is persisted; validity is decided by the
//! signature, the expiry instant and whether `sub` still resolves to a user.
//!
//! The `*_at` variants take the current instant explicitly so expiry is
//! deterministic under test.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  store::{FootprintStore, StoreError},
  user::{Principal, PublicUser, User},
};

/// How long a freshly minted token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 24;

// ─── Wire types ──────────────────────────────────────────────────────────────

/// The signed payload of a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
  /// The principal's user id.
  pub sub: Uuid,
  /// Issued at, epoch seconds.
  pub iat: i64,
  /// Expiry, epoch seconds.
  pub exp: i64,
}

/// Input to [`CredentialAuthority::register`].
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
  pub name:     String,
  pub email:    String,
  pub password: String,
}

/// Returned by registration and login.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
  pub token: String,
  pub user:  PublicUser,
}

// ─── Password hashing ────────────────────────────────────────────────────────

/// Hash `password` with argon2id and a fresh random salt, returning the PHC
/// string.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Hashing(e.to_string()))
}

/// Check `password` against a stored PHC string. An unparseable hash never
/// verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(password_hash) else {
    warn!("stored password hash is not a valid PHC string");
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Authority ───────────────────────────────────────────────────────────────

/// Issues and checks credentials. Holds only the signing key; all state lives
/// in the store passed to each call.
#[derive(Clone)]
pub struct CredentialAuthority {
  encoding:   EncodingKey,
  decoding:   DecodingKey,
  validation: Validation,
}

impl CredentialAuthority {
  /// Build an authority around the process-wide signing secret.
  pub fn new(secret: &str) -> Result<Self> {
    if secret.trim().is_empty() {
      return Err(Error::Configuration("jwt secret must not be empty".into()));
    }

    // Expiry is checked by hand against an explicit instant, with no leeway.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    Ok(Self {
      encoding: EncodingKey::from_secret(secret.as_bytes()),
      decoding: DecodingKey::from_secret(secret.as_bytes()),
      validation,
    })
  }

  // ── Tokens ────────────────────────────────────────────────────────────

  pub fn mint_token(&self, user_id: Uuid) -> Result<String> {
    self.mint_token_at(user_id, Utc::now())
  }

  /// Mint a token for `user_id` as if issued at `now`.
  pub fn mint_token_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String> {
    let expires = now + TimeDelta::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
      sub: user_id,
      iat: now.timestamp(),
      exp: expires.timestamp(),
    };
    Ok(jsonwebtoken::encode(
      &Header::new(Algorithm::HS256),
      &claims,
      &self.encoding,
    )?)
  }

  /// Verify the signature and expiry of `token` without touching the store.
  pub fn decode_token_at(
    &self,
    token: Option<&str>,
    now: DateTime<Utc>,
  ) -> Result<Claims> {
    let token = token
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .ok_or(Error::MissingToken)?;

    let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
      .map_err(|e| Error::MalformedToken(e.to_string()))?;

    if now.timestamp() >= data.claims.exp {
      return Err(Error::ExpiredToken);
    }
    Ok(data.claims)
  }

  /// Resolve `token` to a [`Principal`].
  pub async fn validate_token<S: FootprintStore>(
    &self,
    store: &S,
    token: Option<&str>,
  ) -> Result<Principal> {
    self.validate_token_at(store, token, Utc::now()).await
  }

  pub async fn validate_token_at<S: FootprintStore>(
    &self,
    store: &S,
    token: Option<&str>,
    now: DateTime<Utc>,
  ) -> Result<Principal> {
    let claims = self.decode_token_at(token, now)?;
    let user = store
      .find_user_by_id(claims.sub)
      .await
      .map_err(Error::store)?
      .ok_or(Error::UnknownPrincipal(claims.sub))?;
    Ok(Principal::new(user))
  }

  // ── Accounts ──────────────────────────────────────────────────────────

  /// Create a user and log them in.
  pub async fn register<S: FootprintStore>(
    &self,
    store: &S,
    registration: Registration,
  ) -> Result<Session> {
    let name = registration.name.trim().to_owned();
    let email = registration.email.trim().to_owned();
    validate_registration(&name, &email, &registration.password)?;

    let existing = store
      .find_user_by_email(&email)
      .await
      .map_err(Error::store)?;
    if existing.is_some() {
      return Err(Error::DuplicateIdentity(email));
    }

    let user = User {
      user_id: Uuid::new_v4(),
      name,
      email,
      password_hash: hash_password(&registration.password)?,
      created_at: Utc::now(),
    };

    // A concurrent registration can still win the race between the lookup
    // and the insert; the store's uniqueness constraint catches it.
    let user = store.insert_user(user).await.map_err(|e| {
      if StoreError::is_conflict(&e) {
        Error::DuplicateIdentity(registration.email.trim().to_owned())
      } else {
        Error::store(e)
      }
    })?;

    let token = self.mint_token(user.user_id)?;
    info!(user_id = %user.user_id, "registered user");
    Ok(Session { token, user: user.public() })
  }

  /// Exchange an email and password for a fresh token.
  pub async fn login<S: FootprintStore>(
    &self,
    store: &S,
    email: &str,
    password: &str,
  ) -> Result<Session> {
    let user = store
      .find_user_by_email(email.trim())
      .await
      .map_err(Error::store)?
      .ok_or(Error::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash) {
      return Err(Error::InvalidCredentials);
    }

    let token = self.mint_token(user.user_id)?;
    info!(user_id = %user.user_id, "user logged in");
    Ok(Session { token, user: user.public() })
  }
}

fn validate_registration(name: &str, email: &str, password: &str) -> Result<()> {
  if name.is_empty() {
    return Err(Error::Validation("name is required".into()));
  }
  if !email.contains('@') {
    return Err(Error::Validation("email is not a valid address".into()));
  }
  if password.is_empty() {
    return Err(Error::Validation("password is required".into()));
  }
  Ok(())
}
