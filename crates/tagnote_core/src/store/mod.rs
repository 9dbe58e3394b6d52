//! Owned entity collections backed by persisted slots.
//!
//! # Responsibility
//! - Own the tag and note collections and every mutation of them.
//! - Write each successful mutation through to its slot before returning.
//!
//! # Invariants
//! - Mutating an unknown id is a no-op reported as `Ok(false)`, never an error.
//! - A backend write failure is returned and the collection stays as it was.
//! - The two stores never touch each other; cross-store steps belong to the
//!   composing service.

use crate::model::tag::TagId;
use crate::slot::SlotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_store;
pub mod tag_store;

pub use note_store::NoteStore;
pub use tag_store::TagStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Persisting the collection failed; the in-memory state was not changed.
    Slot(SlotError),
    /// A caller-minted tag id collides with an existing tag.
    DuplicateTagId(TagId),
    /// A caller-minted tag id belongs to a tag this store already removed.
    RetiredTagId(TagId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(err) => write!(f, "{err}"),
            Self::DuplicateTagId(id) => write!(f, "tag id already exists: {id}"),
            Self::RetiredTagId(id) => write!(f, "tag id was removed and cannot be reused: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Slot(err) => Some(err),
            Self::DuplicateTagId(_) | Self::RetiredTagId(_) => None,
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}
