//! Game domain model.
//!
//! # Responsibility
//! - Define the canonical `Game` shape shared by store and service layers.
//! - Define partial-update input used by the update use-case.
//!
//! # Invariants
//! - `id` is assigned by the store on creation and never changes afterwards.
//! - `name` and `description` are the only mutable fields.

use serde::{Deserialize, Serialize};

/// Opaque game identifier in textual form (v4 UUID for store-generated ids).
pub type GameId = String;

/// Canonical domain record for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// `None` until the store assigns an identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GameId>,
    pub name: String,
    pub description: String,
}

impl Game {
    /// Creates a game that has not been persisted yet.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Creates a game with a known identifier.
    pub fn with_id(
        id: impl Into<GameId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Partial update for one existing game.
///
/// Absent fields keep the value currently stored for that game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameUpdate {
    pub id: GameId,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl GameUpdate {
    pub fn new(id: impl Into<GameId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
