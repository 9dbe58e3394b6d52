//! Notebook use-case service.
//!
//! # Responsibility
//! - Compose the note and tag stores into one explicit, passed-around handle.
//! - Memoize the note views and drop the memo on every landed mutation.
//! - Own the optional tag-delete cascade, the only cross-store step.
//!
//! # Invariants
//! - Views are recomputed from the current collections only, never patched.
//! - Without cascade, deleting a tag leaves notes untouched.
//! - With cascade, the tag is removed first; if stripping then fails the
//!   notes are left with dangling ids, which projections already tolerate.

use crate::config::NotebookConfig;
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::model::tag::{Tag, TagId};
use crate::search::filter::{filter_notes, NoteQuery};
use crate::slot::SlotStore;
use crate::store::{NoteStore, StoreResult, TagStore};
use crate::view::note_view::{find_view, project_notes, NoteView};
use log::info;
use once_cell::unsync::OnceCell;

/// Notes, tags and their joined views for one process.
pub struct Notebook<S> {
    notes: NoteStore<S>,
    tags: TagStore<S>,
    cascade_tag_deletes: bool,
    views: OnceCell<Vec<NoteView>>,
}

impl<S: SlotStore + Clone> Notebook<S> {
    /// Binds both collections to `store` using the configured slot keys.
    pub fn open(store: S, config: &NotebookConfig) -> Self {
        Self::from_stores(
            NoteStore::new(store.clone(), config.notes_slot_key.as_str()),
            TagStore::new(store, config.tags_slot_key.as_str()),
            config.cascade_tag_deletes,
        )
    }
}

impl<S: SlotStore> Notebook<S> {
    /// Composes independently constructed stores, e.g. on separate backends.
    pub fn from_stores(notes: NoteStore<S>, tags: TagStore<S>, cascade_tag_deletes: bool) -> Self {
        Self {
            notes,
            tags,
            cascade_tag_deletes,
            views: OnceCell::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.all()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.all()
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let note = self.notes.add(draft)?;
        self.invalidate_views();
        Ok(note)
    }

    pub fn update_note(&mut self, id: NoteId, draft: NoteDraft) -> StoreResult<bool> {
        let changed = self.notes.update(id, draft)?;
        self.invalidate_if(changed);
        Ok(changed)
    }

    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let changed = self.notes.remove(id)?;
        self.invalidate_if(changed);
        Ok(changed)
    }

    /// Creates a tag. Notes are unaffected, so views stay valid.
    pub fn add_tag(&mut self, label: impl Into<String>) -> StoreResult<Tag> {
        self.tags.add(label)
    }

    /// Stores a tag minted by the caller, e.g. from a "create option" picker.
    pub fn insert_tag(&mut self, tag: Tag) -> StoreResult<()> {
        self.tags.insert(tag)?;
        // A previously dangling id on some note may resolve now.
        self.invalidate_views();
        Ok(())
    }

    pub fn update_tag(&mut self, id: TagId, label: impl Into<String>) -> StoreResult<bool> {
        let changed = self.tags.update(id, label)?;
        self.invalidate_if(changed);
        Ok(changed)
    }

    /// Deletes a tag; strips it from notes only when cascading is enabled.
    pub fn delete_tag(&mut self, id: TagId) -> StoreResult<bool> {
        let changed = self.tags.remove(id)?;
        self.invalidate_if(changed);
        if changed && self.cascade_tag_deletes {
            let affected = self.notes.strip_tag(id)?;
            info!("event=tag_delete_cascade module=service status=ok tag_id={id} affected={affected}");
        }
        Ok(changed)
    }

    /// Joined views for every note, recomputed after any mutation.
    pub fn note_views(&self) -> &[NoteView] {
        self.views.get_or_init(|| project_notes(self.notes.all(), self.tags.all()))
    }

    pub fn note_view(&self, id: NoteId) -> Option<&NoteView> {
        find_view(self.note_views(), id)
    }

    /// Filters the current views by title and required tags.
    pub fn search(&self, query: &NoteQuery) -> Vec<&NoteView> {
        filter_notes(self.note_views(), query)
    }

    /// Re-reads both collections from the backend on next access, e.g. after
    /// a backend that failed to read has recovered.
    pub fn reload(&mut self) {
        self.notes.reload();
        self.tags.reload();
        self.invalidate_views();
        info!("event=notebook_reload module=service status=ok");
    }

    fn invalidate_if(&mut self, changed: bool) {
        if changed {
            self.invalidate_views();
        }
    }

    fn invalidate_views(&mut self) {
        self.views.take();
    }
}
