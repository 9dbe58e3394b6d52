//! Notebook configuration.
//!
//! # Responsibility
//! - Name the durable slots the two collections live in.
//! - Carry opt-in behavior switches for the composing service.

/// Slot key of the note collection.
pub const DEFAULT_NOTES_SLOT_KEY: &str = "NOTES";
/// Slot key of the tag collection.
pub const DEFAULT_TAGS_SLOT_KEY: &str = "TAGS";

/// Construction-time settings for [`crate::Notebook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookConfig {
    pub notes_slot_key: String,
    pub tags_slot_key: String,
    /// When set, deleting a tag also removes its id from every note.
    ///
    /// Off by default: notes keep the dangling id and projections drop it.
    pub cascade_tag_deletes: bool,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            notes_slot_key: DEFAULT_NOTES_SLOT_KEY.to_string(),
            tags_slot_key: DEFAULT_TAGS_SLOT_KEY.to_string(),
            cascade_tag_deletes: false,
        }
    }
}

impl NotebookConfig {
    pub fn with_cascade_tag_deletes(mut self, enabled: bool) -> Self {
        self.cascade_tag_deletes = enabled;
        self
    }

    /// Uses custom slot keys, e.g. to keep several notebooks in one backend.
    pub fn with_slot_keys(mut self, notes: impl Into<String>, tags: impl Into<String>) -> Self {
        self.notes_slot_key = notes.into();
        self.tags_slot_key = tags.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::NotebookConfig;

    #[test]
    fn default_uses_shared_slot_keys_and_no_cascade() {
        let config = NotebookConfig::default();
        assert_eq!(config.notes_slot_key, "NOTES");
        assert_eq!(config.tags_slot_key, "TAGS");
        assert!(!config.cascade_tag_deletes);
    }
}
