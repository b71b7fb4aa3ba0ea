//! Game use-case service.
//!
//! # Responsibility
//! - Accept transport DTOs and forward them to the game store.
//! - Reshape store responses into service responses.
//!
//! # Invariants
//! - No business rules live here; page metadata is copied verbatim and
//!   mutation responses are narrowed to the affected ids.

use crate::model::game::{Game, GameId, GameUpdate};
use crate::model::page::{FindRequest, FindResponse, SaveResponse};
use crate::repo::game_repo::RepoResult;
use crate::service::dto::{
    CreateGamesRequest, DeleteGamesRequest, GetGamesRequest, ServiceFindResponse,
    ServiceModifyResponse, UpdateGamesRequest,
};
use crate::store::game_store::GameStoreApi;

/// Service facade over a game store.
pub struct GameService<S: GameStoreApi> {
    store: S,
}

impl<S: GameStoreApi> GameService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists one page of games, optionally restricted to `request.ids`.
    pub fn find(&self, request: &GetGamesRequest) -> RepoResult<ServiceFindResponse<Game>> {
        let store_request = FindRequest {
            page_offset: request.page_offset,
            page_size: request.page_size,
            ids: request.ids.clone(),
        };
        self.store.find(&store_request).map(into_find_response)
    }

    /// Gets one game by id; `None` when it does not exist.
    pub fn find_one(&self, id: &str) -> RepoResult<Option<Game>> {
        self.store.find_one(id)
    }

    pub fn create(&self, request: CreateGamesRequest) -> RepoResult<ServiceModifyResponse> {
        let games: Vec<Game> = request
            .games_to_create
            .into_iter()
            .map(Game::from)
            .collect();
        self.store.create(&games).map(into_modify_response)
    }

    /// Applies partial updates; unknown ids are left out of the response.
    pub fn update(&self, request: UpdateGamesRequest) -> RepoResult<ServiceModifyResponse> {
        let updates: Vec<GameUpdate> = request
            .games_to_update
            .into_iter()
            .map(GameUpdate::from)
            .collect();
        self.store.update(&updates).map(into_modify_response)
    }

    /// Deletes games; unknown ids are left out of the response.
    pub fn delete(&self, request: &DeleteGamesRequest) -> RepoResult<ServiceModifyResponse> {
        self.store.delete(&request.ids).map(into_modify_response)
    }
}

fn into_find_response(response: FindResponse<Game>) -> ServiceFindResponse<Game> {
    ServiceFindResponse {
        page_size: response.page_size,
        page_number: response.page_number,
        values: response.values,
        unfetched_ids: response.unfetched_ids,
        more_records: response.more_records,
        total_records: response.total_records,
    }
}

fn into_modify_response(response: SaveResponse<GameId>) -> ServiceModifyResponse {
    ServiceModifyResponse {
        ids: response.values,
    }
}
