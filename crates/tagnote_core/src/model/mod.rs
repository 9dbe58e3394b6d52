//! Domain model for notes and reusable tags.
//!
//! # Responsibility
//! - Define the persisted record shapes for the two durable collections.
//! - Keep Note -> Tag association as an identifier lookup, never ownership.
//!
//! # Invariants
//! - Every entity is identified by a stable random UUID that is never reused.
//! - Notes reference tags weakly; a tag id in a note may no longer resolve.

pub mod note;
pub mod tag;
