//! Identifier generation for newly created games.

use crate::model::game::GameId;
use uuid::Uuid;

/// Source of fresh, globally unique game identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> GameId;
}

/// Produces hyphenated v4 UUID strings (36 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> GameId {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> GameId,
{
    fn next_id(&self) -> GameId {
        self()
    }
}
