use gamedeck_core::db::migrations::latest_version;
use gamedeck_core::db::open_db_in_memory;
use gamedeck_core::{GameRecord, GameRepository, RepoError, SqliteGameRepository};
use rusqlite::Connection;

fn record(n: usize) -> GameRecord {
    GameRecord {
        id: format!("00000000-0000-4000-8000-{n:012}"),
        name: format!("Game {n}"),
        description: format!("Description {n}"),
    }
}

fn seed(repo: &SqliteGameRepository<'_>, count: usize) -> Vec<GameRecord> {
    let records: Vec<GameRecord> = (0..count).map(record).collect();
    repo.save_all(&records).unwrap();
    records
}

fn ids(records: &[GameRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

#[test]
fn paged_scan_returns_window_in_insertion_order_with_total() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();
    let records = seed(&repo, 25);

    let page = repo.paged_scan(10, 5).unwrap();
    assert_eq!(page.records, records[10..15].to_vec());
    assert_eq!(page.total_count, 25);

    let tail = repo.paged_scan(20, 10).unwrap();
    assert_eq!(tail.records, records[20..].to_vec());
    assert_eq!(tail.total_count, 25);

    let past_end = repo.paged_scan(40, 10).unwrap();
    assert!(past_end.records.is_empty());
    assert_eq!(past_end.total_count, 25);
}

#[test]
fn scan_by_ids_counts_only_requested_matches() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();
    let records = seed(&repo, 10);

    let wanted = vec![
        records[7].id.clone(),
        "missing".to_string(),
        records[2].id.clone(),
        records[5].id.clone(),
    ];
    let page = repo.scan_by_ids(&wanted, 0, 2).unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(ids(&page.records), vec![records[2].id.clone(), records[5].id.clone()]);

    let empty = repo.scan_by_ids(&[], 0, 10).unwrap();
    assert!(empty.records.is_empty());
    assert_eq!(empty.total_count, 0);
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();
    let records = seed(&repo, 3);

    assert_eq!(repo.find_by_id(&records[1].id).unwrap(), Some(records[1].clone()));
    assert_eq!(repo.find_by_id("41b61362-4531-4d20-8ebb-974fc59175ec").unwrap(), None);
}

#[test]
fn save_all_upserts_without_moving_existing_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();
    let records = seed(&repo, 3);

    let mut changed = records[0].clone();
    changed.name = "Renamed".to_string();
    let added = record(99);
    let saved = repo.save_all(&[changed.clone(), added.clone()]).unwrap();
    assert_eq!(saved, vec![changed.clone(), added.clone()]);

    let page = repo.paged_scan(0, 10).unwrap();
    assert_eq!(page.total_count, 4);
    assert_eq!(
        page.records,
        vec![changed, records[1].clone(), records[2].clone(), added]
    );
}

#[test]
fn find_by_ids_and_remove_all_touch_only_existing_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();
    let records = seed(&repo, 4);

    let existing = repo
        .find_by_ids(&[records[3].id.clone(), "nope".to_string(), records[0].id.clone()])
        .unwrap();
    assert_eq!(existing, vec![records[0].clone(), records[3].clone()]);

    repo.remove_all(&existing).unwrap();
    let remaining = repo.paged_scan(0, 10).unwrap();
    assert_eq!(remaining.records, records[1..3].to_vec());
    assert_eq!(remaining.total_count, 2);
}

#[test]
fn save_all_is_atomic_when_a_row_fails() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON games
         WHEN NEW.name = 'poison'
         BEGIN SELECT RAISE(ABORT, 'poisoned row'); END;",
    )
    .unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();

    let mut poison = record(2);
    poison.name = "poison".to_string();
    let err = repo.save_all(&[record(1), poison]).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    assert_eq!(repo.paged_scan(0, 10).unwrap().total_count, 0);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteGameRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_games_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteGameRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("games"))
    ));
}

#[test]
fn repository_rejects_games_table_missing_a_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE games (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteGameRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "games",
            column: "description"
        })
    ));
}

#[test]
fn invalid_persisted_id_is_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO games (id, name, description) VALUES ('  ', 'Blank', 'Blank id');",
        [],
    )
    .unwrap();
    let repo = SqliteGameRepository::try_new(&conn).unwrap();

    let err = repo.paged_scan(0, 10).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
