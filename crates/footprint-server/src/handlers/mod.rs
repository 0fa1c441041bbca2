//! JSON handlers, one module per resource.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `POST` | `/api/register` | – | 201 + token and public user |
//! | `POST` | `/api/login` | – | token and public user |
//! | `POST` | `/api/calculate` | Bearer | score, store, return result |
//! | `GET`  | `/api/history` | Bearer | caller's records, newest first |
//! | `POST` | `/api/contact` | – | 201 |

pub mod accounts;
pub mod calculate;
pub mod contact;
pub mod history;
