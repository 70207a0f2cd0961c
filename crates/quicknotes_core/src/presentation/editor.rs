//! Add/edit dialog state.
//!
//! # Responsibility
//! - Track whether the dialog is open and which note it edits.
//! - Dispatch a submitted form to `NoteStore::add` or `NoteStore::update`.
//!
//! # Invariants
//! - `editing` is `Some` only while the dialog edits an existing note.
//! - A failed submit leaves the dialog open with its fields intact.

use crate::model::note::{Note, NoteId};
use crate::repo::kv_repo::KvStore;
use crate::service::note_store::{NoteStore, StoreError, StoreResult};

pub const ADD_DIALOG_TITLE: &str = "Add New Note";
pub const EDIT_DIALOG_TITLE: &str = "Edit Note";

/// Form state of the note dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEditor {
    open: bool,
    editing: Option<NoteId>,
    title: String,
    content: String,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty form for a new note.
    pub fn open_add(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    /// Opens the form prefilled from an existing note.
    pub fn open_edit<K: KvStore>(&mut self, store: &NoteStore<K>, id: &NoteId) -> StoreResult<()> {
        let note = store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        *self = Self {
            open: true,
            editing: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
        };
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Saves the form and closes the dialog.
    pub fn submit<K: KvStore>(&mut self, store: &mut NoteStore<K>) -> StoreResult<Note> {
        let note = match &self.editing {
            Some(id) => store.update(id, &self.title, &self.content)?,
            None => store.add(&self.title, &self.content)?,
        };
        self.close();
        Ok(note)
    }

    /// Discards the form.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&NoteId> {
        self.editing.as_ref()
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.editing.is_some() {
            EDIT_DIALOG_TITLE
        } else {
            ADD_DIALOG_TITLE
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
