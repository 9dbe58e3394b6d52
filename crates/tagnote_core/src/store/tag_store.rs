//! Tag collection store.
//!
//! # Responsibility
//! - Create, relabel and remove tags in one persisted slot.
//!
//! # Invariants
//! - Tag ids are unique within the collection at all times.
//! - An id removed through this store is never handed out or accepted again
//!   for the store's lifetime, so stale note references cannot silently bind
//!   to a new tag.
//! - Removing a tag never edits notes; references to it simply stop resolving.

use crate::model::tag::{Tag, TagId};
use crate::slot::{PersistedSlot, SlotStore};
use crate::store::{StoreError, StoreResult};
use log::{debug, info, warn};
use std::collections::HashSet;
use uuid::Uuid;

/// Owner of the tag collection.
pub struct TagStore<S> {
    slot: PersistedSlot<Vec<Tag>, S>,
    retired: HashSet<TagId>,
}

impl<S: SlotStore> TagStore<S> {
    /// Binds the store to `key` on `store`. The collection loads lazily.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            slot: PersistedSlot::new(store, key, Vec::new()),
            retired: HashSet::new(),
        }
    }

    /// All tags in insertion order.
    pub fn all(&self) -> &[Tag] {
        self.slot.get()
    }

    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.all().iter().find(|tag| tag.id == id)
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Creates a tag with a fresh id and persists it.
    pub fn add(&mut self, label: impl Into<String>) -> StoreResult<Tag> {
        let mut tag = Tag::new(label);
        while self.get(tag.id).is_some() || self.retired.contains(&tag.id) {
            tag.id = Uuid::new_v4();
        }
        self.push(tag.clone())?;
        Ok(tag)
    }

    /// Appends a tag whose id was minted by the caller.
    ///
    /// # Errors
    /// - `StoreError::DuplicateTagId` when the id is already present.
    /// - `StoreError::RetiredTagId` when the id was removed earlier.
    pub fn insert(&mut self, tag: Tag) -> StoreResult<()> {
        if self.get(tag.id).is_some() {
            return Err(StoreError::DuplicateTagId(tag.id));
        }
        if self.retired.contains(&tag.id) {
            warn!(
                "event=tag_insert module=store status=rejected reason=retired_id tag_id={}",
                tag.id
            );
            return Err(StoreError::RetiredTagId(tag.id));
        }
        self.push(tag)
    }

    /// Replaces the label of tag `id`. Returns `Ok(false)` when absent.
    pub fn update(&mut self, id: TagId, label: impl Into<String>) -> StoreResult<bool> {
        let label = label.into();
        let changed = self.slot.try_update(|tags| {
            let index = tags.iter().position(|tag| tag.id == id)?;
            let mut next = tags.clone();
            next[index].label = label;
            Some(next)
        })?;
        log_mutation("tag_update", id, changed);
        Ok(changed)
    }

    /// Removes tag `id`. Returns `Ok(false)` when absent.
    pub fn remove(&mut self, id: TagId) -> StoreResult<bool> {
        let changed = self.slot.try_update(|tags| {
            if !tags.iter().any(|tag| tag.id == id) {
                return None;
            }
            Some(tags.iter().filter(|tag| tag.id != id).cloned().collect())
        })?;
        if changed {
            self.retired.insert(id);
        }
        log_mutation("tag_remove", id, changed);
        Ok(changed)
    }

    /// Drops the cached collection so the next read goes to the backend.
    pub fn reload(&mut self) {
        self.slot.reload();
    }

    fn push(&mut self, tag: Tag) -> StoreResult<()> {
        let id = tag.id;
        self.slot.update(|tags| {
            let mut next = tags.clone();
            next.push(tag);
            next
        })?;
        info!("event=tag_add module=store status=ok tag_id={id}");
        Ok(())
    }
}

fn log_mutation(event: &str, id: TagId, changed: bool) {
    if changed {
        info!("event={event} module=store status=ok tag_id={id}");
    } else {
        debug!("event={event} module=store status=noop reason=not_found tag_id={id}");
    }
}

#[cfg(test)]
mod tests {
    use super::TagStore;
    use crate::model::tag::Tag;
    use crate::slot::MemorySlotStore;
    use crate::store::StoreError;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn ids_stay_unique_across_add_and_remove_cycles() {
        let backend = MemorySlotStore::new();
        let mut store = TagStore::new(&backend, "TAGS");
        let mut seen = HashSet::new();
        for round in 0..50 {
            let tag = store.add(format!("tag {round}")).unwrap();
            assert!(seen.insert(tag.id), "id reused: {}", tag.id);
            if round % 3 == 0 {
                assert!(store.remove(tag.id).unwrap());
            }
        }
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let backend = MemorySlotStore::new();
        let mut store = TagStore::new(&backend, "TAGS");
        let tag = Tag::new("food");
        store.insert(tag.clone()).unwrap();

        let err = store.insert(Tag::with_id(tag.id, "other")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTagId(id) if id == tag.id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(tag.id).map(|t| t.label.as_str()), Some("food"));
    }

    #[test]
    fn insert_rejects_id_of_removed_tag() {
        let backend = MemorySlotStore::new();
        let mut store = TagStore::new(&backend, "TAGS");
        let tag = store.add("food").unwrap();
        assert!(store.remove(tag.id).unwrap());

        let err = store.insert(Tag::with_id(tag.id, "impostor")).unwrap_err();
        assert!(matches!(err, StoreError::RetiredTagId(id) if id == tag.id));
        assert!(store.is_empty());
        assert_eq!(backend.raw("TAGS").as_deref(), Some("[]"));
    }

    #[test]
    fn update_and_remove_unknown_id_are_noops() {
        let backend = MemorySlotStore::new();
        let mut store = TagStore::new(&backend, "TAGS");
        store.add("food").unwrap();
        let before = store.all().to_vec();
        let raw_before = backend.raw("TAGS");

        assert!(!store.update(Uuid::new_v4(), "x").unwrap());
        assert!(!store.remove(Uuid::new_v4()).unwrap());

        assert_eq!(store.all(), before.as_slice());
        assert_eq!(backend.raw("TAGS"), raw_before);
    }

    #[test]
    fn update_relabels_in_place() {
        let backend = MemorySlotStore::new();
        let mut store = TagStore::new(&backend, "TAGS");
        let first = store.add("food").unwrap();
        let second = store.add("errand").unwrap();

        assert!(store.update(first.id, "groceries").unwrap());

        let labels: Vec<&str> = store.all().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["groceries", "errand"]);
        assert_eq!(store.all()[1].id, second.id);
    }
}
