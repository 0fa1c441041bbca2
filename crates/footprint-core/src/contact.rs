//! Contact-form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Input to [`crate::store::FootprintStore::insert_contact`] before an id and
/// timestamp are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl NewContactMessage {
  pub fn validate(&self) -> Result<()> {
    for (field, value) in [
      ("name", &self.name),
      ("email", &self.email),
      ("subject", &self.subject),
      ("message", &self.message),
    ] {
      if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
      }
    }
    if !self.email.contains('@') {
      return Err(Error::Validation("email is not a valid address".into()));
    }
    Ok(())
  }

  /// Validate and stamp the message with an id and the current time.
  pub fn into_message(self) -> Result<ContactMessage> {
    self.validate()?;
    Ok(ContactMessage {
      contact_id: Uuid::new_v4(),
      name:       self.name.trim().to_owned(),
      email:      self.email.trim().to_owned(),
      subject:    self.subject.trim().to_owned(),
      message:    self.message,
      created_at: Utc::now(),
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub contact_id: Uuid,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}
