//! Core data layer for a local tag-based note collection.
//!
//! Notes and tags live in two independently persisted slots of a string-keyed
//! durable store. This crate owns their invariants; presentation layers call
//! the store/service operations and render the derived views.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod slot;
pub mod store;
pub mod view;

pub use config::{NotebookConfig, DEFAULT_NOTES_SLOT_KEY, DEFAULT_TAGS_SLOT_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use model::tag::{Tag, TagId};
pub use search::filter::{filter_notes, NoteQuery};
pub use service::notebook::Notebook;
pub use slot::{
    MemorySlotStore, PersistedSlot, SlotError, SlotResult, SlotStore, SqliteSlotStore,
};
pub use store::{NoteStore, StoreError, StoreResult, TagStore};
pub use view::note_view::{find_view, project_note, project_notes, NoteView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
