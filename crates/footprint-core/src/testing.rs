//! In-memory [`FootprintStore`] used by this crate's unit tests.

use std::sync::Mutex;

use uuid::Uuid;

use crate::{
  calculation::CalculationRecord,
  contact::ContactMessage,
  store::{FootprintStore, StoreError},
  user::User,
};

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
  #[error("email already registered")]
  Conflict,
  #[error("store offline")]
  Offline,
}

impl StoreError for MemoryError {
  fn is_conflict(&self) -> bool { matches!(self, Self::Conflict) }
}

/// Failure mode injected into a [`MemoryStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fault {
  #[default]
  None,
  /// Email lookups see nothing, as if a concurrent insert had not landed
  /// yet. Inserts still enforce uniqueness.
  StaleEmailLookup,
  /// Every call fails with a non-conflict error.
  Offline,
}

#[derive(Default)]
pub struct MemoryStore {
  users:        Mutex<Vec<User>>,
  calculations: Mutex<Vec<CalculationRecord>>,
  contacts:     Mutex<Vec<ContactMessage>>,
  fault:        Mutex<Fault>,
}

impl MemoryStore {
  pub fn user_count(&self) -> usize { self.users.lock().unwrap().len() }

  pub fn set_fault(&self, fault: Fault) { *self.fault.lock().unwrap() = fault; }

  fn fault(&self) -> Result<Fault, MemoryError> {
    match *self.fault.lock().unwrap() {
      Fault::Offline => Err(MemoryError::Offline),
      fault => Ok(fault),
    }
  }
}

impl FootprintStore for MemoryStore {
  type Error = MemoryError;

  async fn insert_user(&self, user: User) -> Result<User, MemoryError> {
    self.fault()?;
    let mut users = self.users.lock().unwrap();
    if users.iter().any(|u| u.email == user.email) {
      return Err(MemoryError::Conflict);
    }
    users.push(user.clone());
    Ok(user)
  }

  async fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> Result<Option<User>, MemoryError> {
    if self.fault()? == Fault::StaleEmailLookup {
      return Ok(None);
    }
    Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
  }

  async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, MemoryError> {
    self.fault()?;
    Ok(self.users.lock().unwrap().iter().find(|u| u.user_id == id).cloned())
  }

  async fn insert_calculation(
    &self,
    record: CalculationRecord,
  ) -> Result<CalculationRecord, MemoryError> {
    self.fault()?;
    self.calculations.lock().unwrap().push(record.clone());
    Ok(record)
  }

  async fn list_calculations_by_user(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<CalculationRecord>, MemoryError> {
    self.fault()?;
    let mut records: Vec<_> = self
      .calculations
      .lock()
      .unwrap()
      .iter()
      .filter(|r| r.user_id == user_id)
      .cloned()
      .collect();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(records)
  }

  async fn insert_contact(&self, message: ContactMessage) -> Result<ContactMessage, MemoryError> {
    self.fault()?;
    self.contacts.lock().unwrap().push(message.clone());
    Ok(message)
  }
}
