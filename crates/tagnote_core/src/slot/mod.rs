//! Durable key-value slots.
//!
//! # Responsibility
//! - Define the string-keyed backend contract (`SlotStore`) that persisted
//!   collections write through to.
//! - Provide SQLite-backed and in-process backend implementations.
//! - Provide `PersistedSlot<T>`, the typed lazily-loaded value over one key.
//!
//! # Invariants
//! - A `save` replaces the whole stored value for its key; there are no
//!   partial writes.
//! - Backend failures on write are surfaced; absent or corrupt data on read
//!   is recovered by the caller-supplied default.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod persisted;
pub mod sqlite;

pub use memory::MemorySlotStore;
pub use persisted::PersistedSlot;
pub use sqlite::SqliteSlotStore;

pub type SlotResult<T> = Result<T, SlotError>;

/// Error for slot backend access and value serialization.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
    /// The slot database was written by a newer schema than this build knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// The in-memory value could not be encoded for storage.
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    /// The backend refused the operation (full, read-only, detached).
    Unavailable(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "slot database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize slot `{key}`: {source}")
            }
            Self::Unavailable(message) => write!(f, "slot backend unavailable: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "slot database is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "slot database table `{table}` is missing required column `{column}`"
            ),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed durable storage for serialized collections.
pub trait SlotStore {
    /// Returns the raw stored value, or `None` when the key was never written.
    fn load(&self, key: &str) -> SlotResult<Option<String>>;
    /// Replaces the stored value for `key`.
    fn save(&self, key: &str, value: &str) -> SlotResult<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn load(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> SlotResult<()> {
        (**self).save(key, value)
    }
}
