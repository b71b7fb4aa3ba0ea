//! Game repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide paged scans, id lookups, batch upserts and batch removals over
//!   the `games` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Scan order is insertion order (`games.seq`), stable across upserts.
//! - `save_all` and `remove_all` are atomic per call.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::game::GameId;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GAME_SELECT_SQL: &str = "SELECT id, name, description FROM games";
const GAME_ORDER_SQL: &str = " ORDER BY seq ASC";
const REQUIRED_COLUMNS: &[&str] = &["seq", "id", "name", "description", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for game persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted game data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is below required {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persisted shape of a game row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    pub description: String,
}

/// One page of records plus the total count of matches ignoring paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPage {
    pub records: Vec<GameRecord>,
    pub total_count: u64,
}

/// Persistence contract the game store depends on.
pub trait GameRepository {
    /// Returns up to `limit` records starting at `offset`, plus the table count.
    fn paged_scan(&self, offset: u32, limit: u32) -> RepoResult<RecordPage>;
    /// Same as `paged_scan`, restricted to `ids`; the count covers matches only.
    fn scan_by_ids(&self, ids: &[GameId], offset: u32, limit: u32) -> RepoResult<RecordPage>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<GameRecord>>;
    /// Upserts records by id and returns the saved records in input order.
    fn save_all(&self, records: &[GameRecord]) -> RepoResult<Vec<GameRecord>>;
    /// Returns the existing records among `ids`, in storage order.
    fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<GameRecord>>;
    fn remove_all(&self, records: &[GameRecord]) -> RepoResult<()>;
}

impl<R: GameRepository + ?Sized> GameRepository for &R {
    fn paged_scan(&self, offset: u32, limit: u32) -> RepoResult<RecordPage> {
        (**self).paged_scan(offset, limit)
    }

    fn scan_by_ids(&self, ids: &[GameId], offset: u32, limit: u32) -> RepoResult<RecordPage> {
        (**self).scan_by_ids(ids, offset, limit)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<GameRecord>> {
        (**self).find_by_id(id)
    }

    fn save_all(&self, records: &[GameRecord]) -> RepoResult<Vec<GameRecord>> {
        (**self).save_all(records)
    }

    fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<GameRecord>> {
        (**self).find_by_ids(ids)
    }

    fn remove_all(&self, records: &[GameRecord]) -> RepoResult<()> {
        (**self).remove_all(records)
    }
}

/// SQLite-backed game repository.
pub struct SqliteGameRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGameRepository<'conn> {
    /// Wraps a connection after checking that migrations were applied.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is behind.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema is
    ///   not the one this repository queries.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let columns = table_columns(conn, "games")?;
        if columns.is_empty() {
            return Err(RepoError::MissingRequiredTable("games"));
        }
        if let Some(column) = REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|required| !columns.iter().any(|column| column.as_str() == *required))
        {
            return Err(RepoError::MissingRequiredColumn {
                table: "games",
                column,
            });
        }

        Ok(Self { conn })
    }

    fn query_records(&self, sql: &str, bind_values: Vec<Value>) -> RepoResult<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_game_row(row)?);
        }
        Ok(records)
    }

    fn query_count(&self, sql: &str, bind_values: Vec<Value>) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row(sql, params_from_iter(bind_values), |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

impl GameRepository for SqliteGameRepository<'_> {
    fn paged_scan(&self, offset: u32, limit: u32) -> RepoResult<RecordPage> {
        let records = self.query_records(
            &format!("{GAME_SELECT_SQL}{GAME_ORDER_SQL} LIMIT ? OFFSET ?"),
            vec![
                Value::Integer(i64::from(limit)),
                Value::Integer(i64::from(offset)),
            ],
        )?;
        let total_count = self.query_count("SELECT COUNT(*) FROM games", Vec::new())?;

        Ok(RecordPage {
            records,
            total_count,
        })
    }

    fn scan_by_ids(&self, ids: &[GameId], offset: u32, limit: u32) -> RepoResult<RecordPage> {
        if ids.is_empty() {
            return Ok(RecordPage::default());
        }

        let placeholders = placeholders(ids.len());
        let mut bind_values = text_values(ids);
        bind_values.push(Value::Integer(i64::from(limit)));
        bind_values.push(Value::Integer(i64::from(offset)));
        let records = self.query_records(
            &format!(
                "{GAME_SELECT_SQL} WHERE id IN ({placeholders}){GAME_ORDER_SQL} LIMIT ? OFFSET ?"
            ),
            bind_values,
        )?;
        let total_count = self.query_count(
            &format!("SELECT COUNT(*) FROM games WHERE id IN ({placeholders})"),
            text_values(ids),
        )?;

        Ok(RecordPage {
            records,
            total_count,
        })
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<GameRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GAME_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_game_row(row)?));
        }

        Ok(None)
    }

    fn save_all(&self, records: &[GameRecord]) -> RepoResult<Vec<GameRecord>> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO games (id, name, description)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    description = excluded.description,
                    updated_at = (strftime('%s', 'now') * 1000);",
            )?;
            for record in records {
                stmt.execute(params![
                    record.id.as_str(),
                    record.name.as_str(),
                    record.description.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        Ok(records.to_vec())
    }

    fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<GameRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.query_records(
            &format!(
                "{GAME_SELECT_SQL} WHERE id IN ({}){GAME_ORDER_SQL}",
                placeholders(ids.len())
            ),
            text_values(ids),
        )
    }

    fn remove_all(&self, records: &[GameRecord]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM games WHERE id = ?1;")?;
            for record in records {
                stmt.execute([record.id.as_str()])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}

fn parse_game_row(row: &Row<'_>) -> RepoResult<GameRecord> {
    let id: String = row.get("id")?;
    if id.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "empty id value in games.id".to_string(),
        ));
    }

    Ok(GameRecord {
        id,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn text_values(ids: &[GameId]) -> Vec<Value> {
    ids.iter().map(|id| Value::Text(id.clone())).collect()
}
