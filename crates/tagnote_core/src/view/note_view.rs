//! Note -> tag join.

use crate::model::note::{Note, NoteId};
use crate::model::tag::{Tag, TagId};
use std::collections::HashSet;

/// Note with its tag references resolved to tag entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    /// Resolved tags, in tag collection order, one entry per tag.
    pub tags: Vec<Tag>,
}

impl NoteView {
    /// Returns whether `tag_id` resolved onto this view.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|tag| tag.id == tag_id)
    }
}

/// Projects every note against the current tag collection, keeping note order.
pub fn project_notes(notes: &[Note], tags: &[Tag]) -> Vec<NoteView> {
    notes.iter().map(|note| project_note(note, tags)).collect()
}

/// Projects one note. Tag ids with no matching tag are silently dropped.
pub fn project_note(note: &Note, tags: &[Tag]) -> NoteView {
    let referenced: HashSet<TagId> = note.tag_ids.iter().copied().collect();
    NoteView {
        id: note.id,
        title: note.title.clone(),
        body: note.body.clone(),
        tags: tags
            .iter()
            .filter(|tag| referenced.contains(&tag.id))
            .cloned()
            .collect(),
    }
}

/// Finds the view for `id`, e.g. for a note detail page.
pub fn find_view(views: &[NoteView], id: NoteId) -> Option<&NoteView> {
    views.iter().find(|view| view.id == id)
}

#[cfg(test)]
mod tests {
    use super::{find_view, project_note, project_notes};
    use crate::model::note::{Note, NoteDraft};
    use crate::model::tag::Tag;
    use uuid::Uuid;

    #[test]
    fn dangling_tag_ids_are_dropped() {
        let food = Tag::new("food");
        let note = Note::new(NoteDraft::new("t", "b").with_tag_ids([Uuid::new_v4(), food.id]));

        let view = project_note(&note, std::slice::from_ref(&food));

        assert_eq!(view.tags, vec![food]);
    }

    #[test]
    fn resolved_tags_follow_tag_collection_order_without_duplicates() {
        let food = Tag::new("food");
        let errand = Tag::new("errand");
        let note = Note::new(
            NoteDraft::new("t", "b").with_tag_ids([errand.id, food.id, errand.id]),
        );

        let view = project_note(&note, &[food.clone(), errand.clone()]);

        assert_eq!(view.tags, vec![food, errand]);
    }

    #[test]
    fn projection_is_repeatable_and_preserves_note_order() {
        let tag = Tag::new("x");
        let notes = vec![
            Note::new(NoteDraft::new("b", "").with_tags(std::slice::from_ref(&tag))),
            Note::new(NoteDraft::new("a", "")),
        ];
        let tags = vec![tag];

        let first = project_notes(&notes, &tags);
        let second = project_notes(&notes, &tags);

        assert_eq!(first, second);
        assert_eq!(first[0].id, notes[0].id);
        assert_eq!(first[1].id, notes[1].id);
        assert!(find_view(&first, notes[1].id).is_some());
        assert!(find_view(&first, Uuid::new_v4()).is_none());
    }
}
