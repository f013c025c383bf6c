//! Layout of the `local_storage` table.

use super::{DbError, DbResult};
use rusqlite::Connection;
use std::cmp::Ordering;

/// Layout version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const LOCAL_STORAGE_SQL: &str = include_str!("local_storage.sql");

/// Creates the table on a fresh database and leaves a current one untouched.
///
/// # Errors
/// - [`DbError::SchemaTooNew`] when the file carries a later version.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Greater => Err(DbError::SchemaTooNew { found }),
        Ordering::Equal => Ok(()),
        Ordering::Less => {
            let tx = conn.transaction()?;
            tx.execute_batch(LOCAL_STORAGE_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
    }
}
