//! Resource-level game store.
//!
//! # Responsibility
//! - Compose a repository, the record mapper and an id generator into
//!   find/find_one/create/update/delete use-cases.
//! - Own pagination arithmetic and existence reconciliation.
//!
//! # Invariants
//! - Repository errors are logged and returned unchanged; no retries.
//! - Missing ids are never errors: `find_one` yields `None`, update/delete
//!   drop them silently.

pub mod game_store;
pub mod id_gen;
pub mod mapper;
