//! Use-case services composing the stores.
//!
//! # Responsibility
//! - Give the presentation layer one object to mutate and read through.
//! - Keep derived views in step with store mutations.

pub mod notebook;
