//! Game store: pagination, reconciliation and record mapping over a
//! `GameRepository`.

use crate::model::game::{Game, GameId, GameUpdate};
use crate::model::page::{more_records, page_number, FindRequest, FindResponse, SaveResponse};
use crate::repo::game_repo::{GameRecord, GameRepository, RecordPage, RepoResult};
use crate::store::id_gen::{IdGenerator, UuidV4Generator};
use crate::store::mapper;
use log::{debug, error};
use std::collections::{HashMap, HashSet};

/// Store contract consumed by the service layer.
pub trait GameStoreApi {
    fn find(&self, request: &FindRequest) -> RepoResult<FindResponse<Game>>;
    fn find_one(&self, id: &str) -> RepoResult<Option<Game>>;
    fn create(&self, games: &[Game]) -> RepoResult<SaveResponse<GameId>>;
    fn update(&self, updates: &[GameUpdate]) -> RepoResult<SaveResponse<GameId>>;
    fn delete(&self, ids: &[GameId]) -> RepoResult<SaveResponse<GameId>>;
}

/// Resource-level store for games.
pub struct GameStore<R: GameRepository, G: IdGenerator = UuidV4Generator> {
    repo: R,
    id_gen: G,
}

impl<R: GameRepository> GameStore<R, UuidV4Generator> {
    /// Creates a store that assigns v4 UUIDs to new games.
    pub fn with_uuid_ids(repo: R) -> Self {
        Self::new(repo, UuidV4Generator)
    }
}

impl<R: GameRepository, G: IdGenerator> GameStore<R, G> {
    pub fn new(repo: R, id_gen: G) -> Self {
        Self { repo, id_gen }
    }

    /// Borrow of the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Finds one page of games.
    ///
    /// A non-empty `request.ids` restricts the search and populates
    /// `unfetched_ids`; otherwise the whole table is paged and
    /// `unfetched_ids` is `None`.
    pub fn find(&self, request: &FindRequest) -> RepoResult<FindResponse<Game>> {
        match request.restricted_ids() {
            Some(ids) => self.find_by_ids(ids, request.page_offset, request.page_size),
            None => {
                let page = logged(
                    "find",
                    self.repo.paged_scan(request.page_offset, request.page_size),
                )?;
                Ok(assemble_page(
                    page,
                    request.page_offset,
                    request.page_size,
                    None,
                ))
            }
        }
    }

    /// Finds one page of the games whose id is in `ids`.
    ///
    /// `unfetched_ids` lists requested ids absent from the returned page, in
    /// request order.
    pub fn find_by_ids(
        &self,
        ids: &[GameId],
        page_offset: u32,
        page_size: u32,
    ) -> RepoResult<FindResponse<Game>> {
        let page = logged(
            "find_by_ids",
            self.repo.scan_by_ids(ids, page_offset, page_size),
        )?;
        let unfetched_ids = {
            let fetched: HashSet<&str> = page.records.iter().map(|r| r.id.as_str()).collect();
            ids.iter()
                .filter(|id| !fetched.contains(id.as_str()))
                .cloned()
                .collect()
        };

        Ok(assemble_page(
            page,
            page_offset,
            page_size,
            Some(unfetched_ids),
        ))
    }

    /// Returns the game with `id`, or `None` when it does not exist.
    pub fn find_one(&self, id: &str) -> RepoResult<Option<Game>> {
        let record = logged("find_one", self.repo.find_by_id(id))?;
        Ok(record.map(mapper::to_domain))
    }

    /// Persists every game as new, ignoring any caller-supplied id.
    ///
    /// Returns the generated ids in save order.
    pub fn create(&self, games: &[Game]) -> RepoResult<SaveResponse<GameId>> {
        let records: Vec<GameRecord> = games
            .iter()
            .map(|game| mapper::to_new_record(game, &self.id_gen))
            .collect();
        let saved = logged("create", self.repo.save_all(&records))?;
        debug!(
            "event=game_create module=store status=ok count={}",
            saved.len()
        );

        Ok(SaveResponse::new(saved.into_iter().map(|r| r.id).collect()))
    }

    /// Applies partial updates to games that exist.
    ///
    /// Fields left `None` keep their stored value. Updates naming unknown ids
    /// are dropped without error; the response lists only saved ids.
    pub fn update(&self, updates: &[GameUpdate]) -> RepoResult<SaveResponse<GameId>> {
        let ids: Vec<GameId> = updates.iter().map(|update| update.id.clone()).collect();
        let existing = logged("update", self.repo.find_by_ids(&ids))?;
        let mut current: HashMap<GameId, GameRecord> = existing
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        let mut merged = Vec::with_capacity(current.len());
        for update in updates {
            if let Some(record) = current.get_mut(&update.id) {
                *record = mapper::merge_update(record, update);
                merged.push(record.clone());
            }
        }

        let saved = logged("update", self.repo.save_all(&merged))?;
        debug!(
            "event=game_update module=store status=ok requested={} saved={}",
            updates.len(),
            saved.len()
        );

        Ok(SaveResponse::new(saved.into_iter().map(|r| r.id).collect()))
    }

    /// Full-record update from domain games.
    ///
    /// Games without an id cannot exist in storage and are dropped.
    pub fn update_games(&self, games: &[Game]) -> RepoResult<SaveResponse<GameId>> {
        let updates: Vec<GameUpdate> = games
            .iter()
            .filter_map(|game| {
                game.id.as_ref().map(|id| GameUpdate {
                    id: id.clone(),
                    name: Some(game.name.clone()),
                    description: Some(game.description.clone()),
                })
            })
            .collect();
        self.update(&updates)
    }

    /// Removes the games that exist among `ids`.
    ///
    /// Returns removed ids in request order without duplicates; unknown ids
    /// are dropped without error.
    pub fn delete(&self, ids: &[GameId]) -> RepoResult<SaveResponse<GameId>> {
        let existing = logged("delete", self.repo.find_by_ids(ids))?;
        logged("delete", self.repo.remove_all(&existing))?;

        let removed: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
        let mut seen = HashSet::new();
        let values: Vec<GameId> = ids
            .iter()
            .filter(|id| removed.contains(id.as_str()) && seen.insert(id.as_str()))
            .cloned()
            .collect();
        debug!(
            "event=game_delete module=store status=ok requested={} removed={}",
            ids.len(),
            values.len()
        );

        Ok(SaveResponse::new(values))
    }
}

impl<R: GameRepository, G: IdGenerator> GameStoreApi for GameStore<R, G> {
    fn find(&self, request: &FindRequest) -> RepoResult<FindResponse<Game>> {
        GameStore::find(self, request)
    }

    fn find_one(&self, id: &str) -> RepoResult<Option<Game>> {
        GameStore::find_one(self, id)
    }

    fn create(&self, games: &[Game]) -> RepoResult<SaveResponse<GameId>> {
        GameStore::create(self, games)
    }

    fn update(&self, updates: &[GameUpdate]) -> RepoResult<SaveResponse<GameId>> {
        GameStore::update(self, updates)
    }

    fn delete(&self, ids: &[GameId]) -> RepoResult<SaveResponse<GameId>> {
        GameStore::delete(self, ids)
    }
}

fn assemble_page(
    page: RecordPage,
    page_offset: u32,
    page_size: u32,
    unfetched_ids: Option<Vec<GameId>>,
) -> FindResponse<Game> {
    let values: Vec<Game> = page.records.into_iter().map(mapper::to_domain).collect();
    FindResponse {
        page_number: page_number(page_offset, page_size),
        page_size: u32::try_from(values.len()).unwrap_or(u32::MAX),
        total_records: page.total_count,
        more_records: more_records(page_offset, page_size, page.total_count),
        unfetched_ids,
        values,
    }
}

fn logged<T>(operation: &'static str, result: RepoResult<T>) -> RepoResult<T> {
    result.map_err(|err| {
        error!("event=game_store module=store status=error operation={operation} error={err}");
        err
    })
}
