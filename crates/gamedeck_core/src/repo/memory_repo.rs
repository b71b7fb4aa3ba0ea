//! In-memory game repository.
//!
//! Mirrors the SQLite repository contract (insertion order, upsert in place,
//! id-restricted counts) without a database. Used by store/service tests and
//! by callers that want a throwaway catalogue.

use crate::model::game::GameId;
use crate::repo::game_repo::{GameRecord, GameRepository, RecordPage, RepoResult};
use std::cell::RefCell;
use std::collections::HashSet;

/// Vector-backed repository; index order is storage order.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    records: RefCell<Vec<GameRecord>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `records` in the given order.
    pub fn with_records(records: Vec<GameRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Returns a copy of all stored records in storage order.
    pub fn snapshot(&self) -> Vec<GameRecord> {
        self.records.borrow().clone()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn paged_scan(&self, offset: u32, limit: u32) -> RepoResult<RecordPage> {
        let records = self.records.borrow();
        Ok(RecordPage {
            records: page_of(records.iter(), offset, limit),
            total_count: records.len() as u64,
        })
    }

    fn scan_by_ids(&self, ids: &[GameId], offset: u32, limit: u32) -> RepoResult<RecordPage> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let records = self.records.borrow();
        let matches: Vec<&GameRecord> = records
            .iter()
            .filter(|record| wanted.contains(record.id.as_str()))
            .collect();

        Ok(RecordPage {
            total_count: matches.len() as u64,
            records: page_of(matches.into_iter(), offset, limit),
        })
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<GameRecord>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    fn save_all(&self, records: &[GameRecord]) -> RepoResult<Vec<GameRecord>> {
        let mut stored = self.records.borrow_mut();
        for record in records {
            match stored.iter_mut().find(|existing| existing.id == record.id) {
                Some(existing) => *existing = record.clone(),
                None => stored.push(record.clone()),
            }
        }

        Ok(records.to_vec())
    }

    fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<GameRecord>> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|record| wanted.contains(record.id.as_str()))
            .cloned()
            .collect())
    }

    fn remove_all(&self, records: &[GameRecord]) -> RepoResult<()> {
        let doomed: HashSet<&str> = records.iter().map(|record| record.id.as_str()).collect();
        self.records
            .borrow_mut()
            .retain(|record| !doomed.contains(record.id.as_str()));
        Ok(())
    }
}

fn page_of<'a>(
    records: impl Iterator<Item = &'a GameRecord>,
    offset: u32,
    limit: u32,
) -> Vec<GameRecord> {
    records
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}
