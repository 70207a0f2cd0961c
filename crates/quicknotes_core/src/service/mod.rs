//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory state mirrored into key-value slots.
//! - Keep presentation layers decoupled from storage details.

pub mod note_store;
pub mod theme_store;
