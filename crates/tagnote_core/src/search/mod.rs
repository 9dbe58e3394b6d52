//! Note list filtering.
//!
//! # Responsibility
//! - Filter projected notes by title substring and required tags.
//! - Keep the predicate a plain boolean; there is no ranking.

pub mod filter;
