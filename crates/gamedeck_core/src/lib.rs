//! Core domain logic for the gamedeck game catalogue.
//! This crate owns paging, reconciliation and persistence of games.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, GamedeckConfig};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::game::{Game, GameId, GameUpdate};
pub use model::page::{FindRequest, FindResponse, SaveResponse};
pub use repo::game_repo::{
    GameRecord, GameRepository, RecordPage, RepoError, RepoResult, SqliteGameRepository,
};
pub use repo::memory_repo::InMemoryGameRepository;
pub use service::dto::{
    CreateGamesRequest, DeleteGamesRequest, GameToCreate, GameToUpdate, GetGameRequest,
    GetGamesRequest, ServiceFindResponse, ServiceModifyResponse, UpdateGamesRequest,
};
pub use service::game_service::GameService;
pub use store::game_store::{GameStore, GameStoreApi};
pub use store::id_gen::{IdGenerator, UuidV4Generator};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
