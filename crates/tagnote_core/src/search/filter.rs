//! Title + tag filter over note views.
//!
//! # Invariants
//! - An empty title query accepts every note.
//! - Title matching is a case-insensitive substring test (Unicode lowercase).
//! - Required tags use AND semantics, compared by id.
//! - Output preserves input order.

use crate::model::tag::{Tag, TagId};
use crate::view::note_view::NoteView;

/// Transient filter parameters owned by the note list UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Title substring. Not trimmed: `" "` only matches titles with a space.
    pub title: String,
    /// Tags a note must all carry.
    pub tag_ids: Vec<TagId>,
}

impl NoteQuery {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag_ids: Vec::new(),
        }
    }

    /// Sets the required tags from the selected tag entities.
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tag_ids = tags.iter().map(|tag| tag.id).collect();
        self
    }

    pub fn with_tag_ids(mut self, tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    /// Returns whether no parameter narrows the result.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.tag_ids.is_empty()
    }
}

/// Returns the views matching `query`, in input order.
pub fn filter_notes<'a>(views: &'a [NoteView], query: &NoteQuery) -> Vec<&'a NoteView> {
    let needle = query.title.to_lowercase();
    views
        .iter()
        .filter(|view| matches_title(view, &needle) && matches_tags(view, &query.tag_ids))
        .collect()
}

fn matches_title(view: &NoteView, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    view.title.to_lowercase().contains(needle)
}

fn matches_tags(view: &NoteView, required: &[TagId]) -> bool {
    required.iter().all(|tag_id| view.has_tag(*tag_id))
}

#[cfg(test)]
mod tests {
    use super::{filter_notes, NoteQuery};
    use crate::model::note::{Note, NoteDraft};
    use crate::model::tag::Tag;
    use crate::view::note_view::project_notes;

    #[test]
    fn title_match_ignores_case_on_both_sides() {
        let notes = vec![Note::new(NoteDraft::new("Grocery LIST", ""))];
        let views = project_notes(&notes, &[]);

        assert_eq!(filter_notes(&views, &NoteQuery::new("list")).len(), 1);
        assert_eq!(filter_notes(&views, &NoteQuery::new("GROCERY l")).len(), 1);
        assert!(filter_notes(&views, &NoteQuery::new("lists")).is_empty());
    }

    #[test]
    fn title_and_tags_are_combined_with_and() {
        let food = Tag::new("food");
        let tags = vec![food.clone()];
        let notes = vec![
            Note::new(NoteDraft::new("Grocery", "").with_tags(&tags)),
            Note::new(NoteDraft::new("Grocery", "")),
            Note::new(NoteDraft::new("Taxes", "").with_tags(&tags)),
        ];
        let views = project_notes(&notes, &tags);

        let query = NoteQuery::new("grocery").with_tags(&[food]);
        let hits = filter_notes(&views, &query);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, notes[0].id);
    }

    #[test]
    fn required_tag_that_no_longer_resolves_matches_nothing() {
        let gone = Tag::new("gone");
        let notes = vec![Note::new(
            NoteDraft::new("n", "").with_tags(std::slice::from_ref(&gone)),
        )];
        let views = project_notes(&notes, &[]);

        let query = NoteQuery::default().with_tag_ids([gone.id]);
        assert!(filter_notes(&views, &query).is_empty());
        assert!(!query.is_empty());
    }
}
