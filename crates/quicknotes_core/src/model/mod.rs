//! Domain model for notes and UI preferences.
//!
//! # Responsibility
//! - Define the records persisted in key-value slots.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` unique within its collection.

pub mod note;
pub mod theme;
