//! Core domain logic for QuickNotes.
//! This crate owns the note collection, its persistence slots and the
//! presentation state front ends drive.

pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteIdGenerator};
pub use model::theme::Theme;
pub use presentation::editor::NoteEditor;
pub use presentation::render::{render_notes, NoteCard, NotesView};
pub use repo::kv_repo::{KvError, KvResult, KvStore, MemoryKvStore, SqliteKvStore};
pub use service::note_store::{NoteStore, StoreError, StoreResult, NOTES_KEY};
pub use service::theme_store::{ThemeStore, THEME_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
