//! Domain model for the game catalogue.
//!
//! # Responsibility
//! - Define the `Game` entity and its partial-update input.
//! - Define paging envelopes shared by store and service layers.
//!
//! # Invariants
//! - Every persisted game is identified by a stable `GameId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod game;
pub mod page;
