//! Note collection store.
//!
//! # Responsibility
//! - Create, replace and remove notes in one persisted slot.
//! - Strip a tag reference from every note when a caller opts into cascading
//!   tag deletes.
//!
//! # Invariants
//! - `update` replaces title, body and tag ids together; the id never changes.
//! - Tag ids are stored as given. Dangling ids are tolerated and resolved away
//!   at projection time.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::model::tag::TagId;
use crate::slot::{PersistedSlot, SlotStore};
use crate::store::StoreResult;
use log::{debug, info};
use uuid::Uuid;

/// Owner of the note collection.
pub struct NoteStore<S> {
    slot: PersistedSlot<Vec<Note>, S>,
}

impl<S: SlotStore> NoteStore<S> {
    /// Binds the store to `key` on `store`. The collection loads lazily.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            slot: PersistedSlot::new(store, key, Vec::new()),
        }
    }

    /// All notes in creation order.
    pub fn all(&self) -> &[Note] {
        self.slot.get()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.all().iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Creates a note with a fresh id and persists it.
    pub fn add(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let mut note = Note::new(draft);
        while self.get(note.id).is_some() {
            note.id = Uuid::new_v4();
        }

        let created = note.clone();
        self.slot.update(|notes| {
            let mut next = notes.clone();
            next.push(note);
            next
        })?;
        info!(
            "event=note_add module=store status=ok note_id={} tag_count={}",
            created.id,
            created.tag_ids.len()
        );
        Ok(created)
    }

    /// Replaces every mutable field of note `id`. Returns `Ok(false)` when
    /// absent.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> StoreResult<bool> {
        let tag_count = draft.tag_ids.len();
        let changed = self.slot.try_update(|notes| {
            let index = notes.iter().position(|note| note.id == id)?;
            let mut next = notes.clone();
            next[index].apply(draft);
            Some(next)
        })?;
        if changed {
            info!("event=note_update module=store status=ok note_id={id} tag_count={tag_count}");
        } else {
            debug!("event=note_update module=store status=noop reason=not_found note_id={id}");
        }
        Ok(changed)
    }

    /// Removes note `id`. Returns `Ok(false)` when absent.
    pub fn remove(&mut self, id: NoteId) -> StoreResult<bool> {
        let changed = self.slot.try_update(|notes| {
            if !notes.iter().any(|note| note.id == id) {
                return None;
            }
            Some(notes.iter().filter(|note| note.id != id).cloned().collect())
        })?;
        if changed {
            info!("event=note_remove module=store status=ok note_id={id}");
        } else {
            debug!("event=note_remove module=store status=noop reason=not_found note_id={id}");
        }
        Ok(changed)
    }

    /// Drops `tag_id` from every note that references it, in one write.
    ///
    /// Returns the number of notes changed; zero performs no write.
    pub fn strip_tag(&mut self, tag_id: TagId) -> StoreResult<usize> {
        let mut affected = 0;
        self.slot.try_update(|notes| {
            affected = notes.iter().filter(|note| note.has_tag(tag_id)).count();
            if affected == 0 {
                return None;
            }
            let next = notes
                .iter()
                .cloned()
                .map(|mut note| {
                    note.tag_ids.retain(|current| *current != tag_id);
                    note
                })
                .collect();
            Some(next)
        })?;
        if affected > 0 {
            info!(
                "event=note_strip_tag module=store status=ok tag_id={tag_id} affected={affected}"
            );
        }
        Ok(affected)
    }

    /// Drops the cached collection so the next read goes to the backend.
    pub fn reload(&mut self) {
        self.slot.reload();
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::NoteDraft;
    use crate::slot::MemorySlotStore;
    use uuid::Uuid;

    #[test]
    fn update_replaces_all_fields() {
        let backend = MemorySlotStore::new();
        let mut store = NoteStore::new(&backend, "NOTES");
        let tag_a = Uuid::new_v4();
        let tag_b = Uuid::new_v4();
        let note = store
            .add(NoteDraft::new("draft", "first body").with_tag_ids([tag_a]))
            .unwrap();

        let changed = store
            .update(
                note.id,
                NoteDraft::new("final", "second body").with_tag_ids([tag_b, tag_a]),
            )
            .unwrap();

        assert!(changed);
        let stored = store.get(note.id).unwrap();
        assert_eq!(stored.title, "final");
        assert_eq!(stored.body, "second body");
        assert_eq!(stored.tag_ids, vec![tag_b, tag_a]);
    }

    #[test]
    fn update_unknown_id_leaves_collection_identical() {
        let backend = MemorySlotStore::new();
        let mut store = NoteStore::new(&backend, "NOTES");
        store.add(NoteDraft::new("a", "b")).unwrap();
        let before = store.all().to_vec();

        let changed = store
            .update(Uuid::new_v4(), NoteDraft::new("x", "y"))
            .unwrap();

        assert!(!changed);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn remove_keeps_order_of_remaining_notes() {
        let backend = MemorySlotStore::new();
        let mut store = NoteStore::new(&backend, "NOTES");
        let first = store.add(NoteDraft::new("1", "")).unwrap();
        let second = store.add(NoteDraft::new("2", "")).unwrap();
        let third = store.add(NoteDraft::new("3", "")).unwrap();

        assert!(store.remove(second.id).unwrap());
        assert!(!store.remove(second.id).unwrap());

        let ids: Vec<_> = store.all().iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn strip_tag_only_touches_referencing_notes() {
        let backend = MemorySlotStore::new();
        let mut store = NoteStore::new(&backend, "NOTES");
        let doomed = Uuid::new_v4();
        let kept = Uuid::new_v4();
        let tagged = store
            .add(NoteDraft::new("tagged", "").with_tag_ids([doomed, kept, doomed]))
            .unwrap();
        let other = store
            .add(NoteDraft::new("other", "").with_tag_ids([kept]))
            .unwrap();

        assert_eq!(store.strip_tag(doomed).unwrap(), 1);
        assert_eq!(store.get(tagged.id).unwrap().tag_ids, vec![kept]);
        assert_eq!(store.get(other.id).unwrap().tag_ids, vec![kept]);
        assert_eq!(store.strip_tag(doomed).unwrap(), 0);
    }
}
