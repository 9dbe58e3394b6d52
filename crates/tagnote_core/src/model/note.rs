//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and the draft used to create/replace it.
//!
//! # Invariants
//! - `id` is immutable; every other field is replaced wholesale on update.
//! - `tag_ids` order carries no meaning and duplicates are tolerated.
//! - Non-empty `title`/`body` is a caller contract, not enforced here.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Persisted note record.
///
/// Serialized with camelCase field names (`tagIds`) to keep the stored JSON
/// array stable for other readers of the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown source text.
    pub body: String,
    /// Weak references into the tag collection.
    pub tag_ids: Vec<TagId>,
}

impl Note {
    /// Creates a note from a draft with a freshly generated id.
    pub fn new(draft: NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a note from a draft with a caller-provided id.
    pub fn with_id(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            tag_ids: draft.tag_ids,
        }
    }

    /// Replaces every mutable field with the draft's values.
    pub fn apply(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.body = draft.body;
        self.tag_ids = draft.tag_ids;
    }

    /// Returns whether this note references `tag_id`.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}

/// Mutable note fields as submitted by a note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tag_ids: Vec<TagId>,
}

impl NoteDraft {
    /// Creates a draft without tags.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tag_ids: Vec::new(),
        }
    }

    /// Sets tag references from selected tag entities.
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tag_ids = tags.iter().map(|tag| tag.id).collect();
        self
    }

    /// Sets tag references from raw ids.
    pub fn with_tag_ids(mut self, tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteDraft};
    use crate::model::tag::Tag;

    #[test]
    fn draft_with_tags_keeps_selection_order() {
        let food = Tag::new("food");
        let errand = Tag::new("errand");
        let draft = NoteDraft::new("t", "b").with_tags(&[errand.clone(), food.clone()]);
        assert_eq!(draft.tag_ids, vec![errand.id, food.id]);
    }

    #[test]
    fn apply_replaces_all_mutable_fields_but_keeps_id() {
        let tag = Tag::new("x");
        let mut note = Note::new(NoteDraft::new("old", "old body").with_tags(&[tag.clone()]));
        let id = note.id;

        note.apply(NoteDraft::new("new", "new body"));

        assert_eq!(note.id, id);
        assert_eq!(note.title, "new");
        assert_eq!(note.body, "new body");
        assert!(note.tag_ids.is_empty());
        assert!(!note.has_tag(tag.id));
    }

    #[test]
    fn note_serializes_tag_ids_in_camel_case() {
        let note = Note::new(NoteDraft::new("t", "b"));
        let json = serde_json::to_value(&note).expect("note should serialize");
        assert!(json.get("tagIds").is_some());
        assert!(json.get("tag_ids").is_none());
    }
}
