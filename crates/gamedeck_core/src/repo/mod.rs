//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract the game store depends on.
//! - Isolate SQLite query details from store/service orchestration.
//!
//! # Invariants
//! - Repositories never interpret "not found" as an error; absence is `None`
//!   or an omitted record.

pub mod game_repo;
pub mod memory_repo;
