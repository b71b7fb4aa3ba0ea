//! Transport request/response shapes for game use-cases.
//!
//! Field names serialize in camelCase to match the public API contract.

use crate::model::game::{Game, GameId, GameUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGamesRequest {
    pub page_size: u32,
    pub page_offset: u32,
    /// Optional batch restriction; empty or absent pages the whole catalogue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<GameId>>,
}

impl GetGamesRequest {
    pub fn new(page_size: u32, page_offset: u32) -> Self {
        Self {
            page_size,
            page_offset,
            ids: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGameRequest {
    pub id: GameId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameToCreate {
    pub name: String,
    pub description: String,
}

impl From<GameToCreate> for Game {
    fn from(value: GameToCreate) -> Self {
        Game::new(value.name, value.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGamesRequest {
    pub games_to_create: Vec<GameToCreate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameToUpdate {
    pub id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<GameToUpdate> for GameUpdate {
    fn from(value: GameToUpdate) -> Self {
        GameUpdate {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGamesRequest {
    pub games_to_update: Vec<GameToUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteGamesRequest {
    pub ids: Vec<GameId>,
}

/// Page of values with pagination metadata copied from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFindResponse<T> {
    pub page_size: u32,
    pub page_number: u32,
    pub values: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unfetched_ids: Option<Vec<GameId>>,
    pub more_records: bool,
    pub total_records: u64,
}

/// Ids affected by a create/update/delete call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceModifyResponse {
    pub ids: Vec<GameId>,
}
