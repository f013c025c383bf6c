//! Item store contract and SQLite key/value implementation.
//!
//! # Responsibility
//! - Load, save and clear the persisted ordered list of item strings.
//! - Encode the list as one JSON array under a single fixed key.
//!
//! # Invariants
//! - `load()` after `save(list)` returns `list` unchanged.
//! - Malformed persisted data never panics. `load` recovers to an empty list
//!   with a warning and `load_strict` reports it.

use crate::db::DbError;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized item array.
pub const ITEMS_STORAGE_KEY: &str = "items";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for item store reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The item list could not be serialized.
    Encode(serde_json::Error),
    /// Persisted value is not a JSON array of strings.
    CorruptPersistedState {
        key: &'static str,
        message: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode item list: {err}"),
            Self::CorruptPersistedState { key, message } => {
                write!(f, "corrupt persisted state under `{key}`: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::CorruptPersistedState { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable store for the ordered item list.
pub trait ItemStore {
    /// Loads the persisted list, failing on malformed data.
    fn load_strict(&self) -> StoreResult<Vec<String>>;

    /// Fully overwrites the persisted list.
    fn save(&self, items: &[String]) -> StoreResult<()>;

    /// Removes all persisted state.
    fn clear(&self) -> StoreResult<()>;

    /// Loads the persisted list, recovering from malformed data.
    ///
    /// Corrupt state is logged and reported as an empty list. The next
    /// `save` overwrites it.
    fn load(&self) -> StoreResult<Vec<String>> {
        self.load_recovering().map(|(items, _)| items)
    }

    /// Same as [`ItemStore::load`], also returning the corrupt-state error
    /// that was recovered from, if any.
    fn load_recovering(&self) -> StoreResult<(Vec<String>, Option<StoreError>)> {
        match self.load_strict() {
            Ok(items) => Ok((items, None)),
            Err(err @ StoreError::CorruptPersistedState { .. }) => {
                warn!(
                    "event=store_load module=repo status=recovered key={ITEMS_STORAGE_KEY} reason=corrupt_state error={err}"
                );
                Ok((Vec::new(), Some(err)))
            }
            Err(err) => Err(err),
        }
    }
}

/// SQLite-backed item store over the `local_storage` key/value table.
pub struct SqliteItemStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemStore<'conn> {
    /// Creates a store on a connection opened by [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_raw(&self) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [ITEMS_STORAGE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl ItemStore for SqliteItemStore<'_> {
    fn load_strict(&self) -> StoreResult<Vec<String>> {
        let Some(raw) = self.read_raw()? else {
            debug!("event=store_load module=repo status=ok key={ITEMS_STORAGE_KEY} count=0 reason=missing_key");
            return Ok(Vec::new());
        };

        let items = decode_items(&raw)?;
        debug!(
            "event=store_load module=repo status=ok key={ITEMS_STORAGE_KEY} count={}",
            items.len()
        );
        Ok(items)
    }

    fn save(&self, items: &[String]) -> StoreResult<()> {
        let encoded = serde_json::to_string(items).map_err(StoreError::Encode)?;
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![ITEMS_STORAGE_KEY, encoded],
        )?;
        debug!(
            "event=store_save module=repo status=ok key={ITEMS_STORAGE_KEY} count={}",
            items.len()
        );
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM local_storage WHERE key = ?1;",
            [ITEMS_STORAGE_KEY],
        )?;
        debug!("event=store_clear module=repo status=ok key={ITEMS_STORAGE_KEY}");
        Ok(())
    }
}

fn decode_items(raw: &str) -> StoreResult<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|err| StoreError::CorruptPersistedState {
        key: ITEMS_STORAGE_KEY,
        message: err.to_string(),
    })
}
