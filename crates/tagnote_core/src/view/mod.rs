//! Read-only projections over the stored collections.
//!
//! # Responsibility
//! - Join notes with the tags they reference into denormalized views.
//!
//! # Invariants
//! - Projection is pure: output depends only on the current notes and tags.
//! - Unresolvable tag ids are dropped, never reported.

pub mod note_view;
