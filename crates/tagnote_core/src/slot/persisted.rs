//! Typed value persisted under one slot key.
//!
//! # Responsibility
//! - Lazily load and decode a value from a `SlotStore` on first access.
//! - Write every change through to the backend synchronously.
//!
//! # Invariants
//! - Absent or undecodable data yields the caller's default and is never
//!   written back on read.
//! - A backend read failure is not cached. Reads show the default, writes are
//!   refused with the read error until a load succeeds.
//! - A write lands in memory only after the backend accepted it. A failed
//!   write leaves the previous in-memory value in place.

use super::{SlotError, SlotResult, SlotStore};
use log::{debug, error, warn};
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One named entry in a durable key-value store, cached as a typed value.
pub struct PersistedSlot<T, S> {
    store: S,
    key: String,
    default: T,
    value: OnceCell<T>,
}

impl<T, S> PersistedSlot<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: SlotStore,
{
    /// Binds a slot to `key`. Performs no I/O.
    pub fn new(store: S, key: impl Into<String>, default: T) -> Self {
        Self {
            store,
            key: key.into(),
            default,
            value: OnceCell::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current value, loading it on first access.
    ///
    /// While the backend cannot be read this returns the default without
    /// caching it; the next call retries the load.
    pub fn get(&self) -> &T {
        self.load().unwrap_or(&self.default)
    }

    /// Returns the current value, or the backend error that kept it from
    /// loading.
    pub fn load(&self) -> SlotResult<&T> {
        self.value.get_or_try_init(|| self.read_backend())
    }

    /// Replaces the value and persists it.
    pub fn set(&mut self, next: T) -> SlotResult<()> {
        self.update(|_| next)
    }

    /// Computes the next value from the current one and persists it.
    pub fn update(&mut self, next: impl FnOnce(&T) -> T) -> SlotResult<()> {
        self.try_update(|current| Some(next(current))).map(|_| ())
    }

    /// Like [`PersistedSlot::update`], but `compute` may decline with `None`.
    ///
    /// Returns `Ok(false)` without touching the backend when declined. This is
    /// the only path that writes to the backend.
    ///
    /// # Errors
    /// - The stored value could not be read; nothing is computed or written,
    ///   so an unreadable collection is never overwritten.
    /// - Serialization or the backend write failed.
    pub fn try_update(&mut self, compute: impl FnOnce(&T) -> Option<T>) -> SlotResult<bool> {
        let Some(next) = compute(self.load()?) else {
            return Ok(false);
        };

        let encoded = serde_json::to_string(&next).map_err(|source| SlotError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        if let Err(err) = self.store.save(&self.key, &encoded) {
            error!(
                "event=slot_write module=slot status=error key={} bytes={} error={}",
                self.key,
                encoded.len(),
                err
            );
            return Err(err);
        }
        debug!(
            "event=slot_write module=slot status=ok key={} bytes={}",
            self.key,
            encoded.len()
        );

        self.value = OnceCell::with_value(next);
        Ok(true)
    }

    /// Drops the cached value so the next `get` reads the backend again.
    pub fn reload(&mut self) {
        self.value.take();
    }

    fn read_backend(&self) -> SlotResult<T> {
        let raw = match self.store.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(
                    "event=slot_load module=slot status=default reason=absent key={}",
                    self.key
                );
                return Ok(self.default.clone());
            }
            Err(err) => {
                error!(
                    "event=slot_load module=slot status=error key={} error={}",
                    self.key, err
                );
                return Err(err);
            }
        };

        let value = match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(
                    "event=slot_load module=slot status=ok key={} bytes={}",
                    self.key,
                    raw.len()
                );
                value
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=slot status=default reason=parse_failed key={} bytes={} error={}",
                    self.key,
                    raw.len(),
                    err
                );
                self.default.clone()
            }
        };
        Ok(value)
    }
}
