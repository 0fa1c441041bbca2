//! Core types and logic for the footprint service: the emission factor table,
//! the scoring engine, the credential authority and record access.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::FootprintStore`]; the server crate wires
//! everything to axum.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod auth;
pub mod calculation;
pub mod contact;
pub mod error;
pub mod factors;
pub mod lifestyle;
pub mod records;
pub mod scoring;
pub mod store;
pub mod user;

pub use error::{Error, Result};

#[cfg(test)]
mod testing;
