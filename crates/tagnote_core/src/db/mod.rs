//! SQLite bootstrap for the durable slot backend.
//!
//! Connections returned here are migrated and ready for
//! [`crate::slot::SqliteSlotStore`]. Failures surface as
//! [`crate::slot::SlotError`], the same error the slot backend reports.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
