//! Tag domain model.
//!
//! # Responsibility
//! - Define the reusable label entity shared by many notes.
//!
//! # Invariants
//! - `id` is immutable once minted and unique across the tag collection.
//! - `label` is free user text; the model does not normalize it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag.
pub type TagId = Uuid;

/// Independently owned, user-editable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

impl Tag {
    /// Creates a tag with a freshly generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), label)
    }

    /// Creates a tag with a caller-provided id.
    ///
    /// Used when the presentation layer mints the id itself before handing the
    /// tag to the store.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
