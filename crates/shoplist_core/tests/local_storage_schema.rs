use rusqlite::Connection;
use shoplist_core::db::{open_db, open_db_in_memory, DbError, SCHEMA_VERSION};
use shoplist_core::{ItemStore, SqliteItemStore, ITEMS_STORAGE_KEY};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn user_version(conn: &Connection) -> u32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap()
}

fn items_row_count(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM local_storage WHERE key = ?1;",
        [ITEMS_STORAGE_KEY],
        |row| row.get(0),
    )
    .unwrap()
}

fn items_updated_at(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT updated_at FROM local_storage WHERE key = ?1;",
        [ITEMS_STORAGE_KEY],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn fresh_database_gets_keyed_local_storage_table() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);

    let key_pk: i64 = conn
        .query_row(
            "SELECT pk FROM pragma_table_info('local_storage') WHERE name = 'key';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(key_pk, 1, "`key` must be the primary key");
}

#[test]
fn repeated_saves_keep_one_items_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    store.save(&strings(&["milk"])).unwrap();
    store.save(&strings(&["milk", "eggs"])).unwrap();
    store.save(&strings(&["bread"])).unwrap();

    assert_eq!(items_row_count(&conn), 1);
    assert_eq!(store.load().unwrap(), strings(&["bread"]));
}

#[test]
fn save_refreshes_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);
    store.save(&strings(&["milk"])).unwrap();
    assert!(items_updated_at(&conn) > 0);

    conn.execute(
        "UPDATE local_storage SET updated_at = 0 WHERE key = ?1;",
        [ITEMS_STORAGE_KEY],
    )
    .unwrap();
    store.save(&strings(&["milk", "eggs"])).unwrap();

    assert!(items_updated_at(&conn) > 0);
}

#[test]
fn reopening_a_current_file_keeps_the_items_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoplist.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        SqliteItemStore::new(&conn)
            .save(&strings(&["milk", "eggs"]))
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
    assert_eq!(items_row_count(&conn), 1);
    assert_eq!(
        SqliteItemStore::new(&conn).load_strict().unwrap(),
        strings(&["milk", "eggs"])
    );
}

#[test]
fn newer_schema_version_is_refused_without_touching_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.pragma_update(None, "user_version", 7u32).unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found } => assert_eq!(found, 7),
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE name = 'local_storage';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}
