//! In-memory note collection mirrored to one persistent slot.
//!
//! # Responsibility
//! - Load the collection once, then serve reads from memory.
//! - Apply add/update/delete and write the full collection after each one.
//!
//! # Invariants
//! - New notes are prepended; edits keep id and position.
//! - Every mutation writes the full collection once; memory changes only
//!   after that write succeeds.
//! - A missing or malformed slot loads as an empty collection.
//! - Log events carry ids and counts only, never titles or content.

use crate::model::note::{Note, NoteId, NoteIdGenerator};
use crate::repo::kv_repo::{KvError, KvStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the JSON array of notes.
pub const NOTES_KEY: &str = "quickNotes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Target note does not exist.
    NotFound(NoteId),
    /// Slot backend failure.
    Kv(KvError),
    /// Collection could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Kv(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Kv(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Owned note collection bound to a key-value backend.
pub struct NoteStore<K: KvStore> {
    kv: K,
    notes: Vec<Note>,
    ids: NoteIdGenerator,
}

impl<K: KvStore> NoteStore<K> {
    /// Opens a store and loads whatever the notes slot currently holds.
    pub fn open(kv: K) -> Self {
        let mut store = Self {
            kv,
            notes: Vec::new(),
            ids: NoteIdGenerator::new(),
        };
        store.notes = store.load();
        store.ids.observe(store.notes.iter().map(|note| &note.id));
        store
    }

    /// Reads the persisted collection.
    ///
    /// Never fails: an absent slot, an unreadable backend or malformed JSON
    /// all yield an empty sequence.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.kv.get_item(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=notes_load module=store status=ok source=empty count=0");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=fallback error_code=kv_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                info!(
                    "event=notes_load module=store status=ok source=slot count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=fallback error_code=malformed_notes line={} column={}",
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }

    /// Encodes the whole collection as the JSON array stored in the slot.
    pub fn serialize(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(&self.notes)?)
    }

    /// Writes the whole collection to the notes slot.
    pub fn save(&self) -> StoreResult<()> {
        write_notes(&self.kv, &self.notes)
    }

    /// Creates a note with a fresh id, prepends it and persists.
    pub fn add(&mut self, title: &str, content: &str) -> StoreResult<Note> {
        let note = Note::new(self.ids.peek(), title, content);
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend_from_slice(&self.notes);

        self.commit(next, "note_add", &note.id)?;
        self.ids.observe([&note.id]);
        info!(
            "event=note_add module=store status=ok note_id={} count={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces title and content of an existing note in place and persists.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is not in the collection; nothing
    ///   is written in that case.
    pub fn update(&mut self, id: &NoteId, title: &str, content: &str) -> StoreResult<Note> {
        let Some(index) = self.position(id) else {
            warn!("event=note_update module=store status=error error_code=not_found note_id={id}");
            return Err(StoreError::NotFound(id.clone()));
        };

        let updated = Note::new(id.clone(), title, content);
        let mut next = self.notes.clone();
        next[index] = updated.clone();

        self.commit(next, "note_update", id)?;
        info!("event=note_update module=store status=ok note_id={id} position={index}");
        Ok(updated)
    }

    /// Removes the note with `id` if present, then persists.
    ///
    /// Deleting an unknown id is not an error.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<()> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| &note.id != id)
            .cloned()
            .collect();
        let removed = self.notes.len() - next.len();

        self.commit(next, "note_delete", id)?;
        info!("event=note_delete module=store status=ok note_id={id} removed={removed}");
        Ok(())
    }

    /// Notes in display order, newest-added first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }

    /// Persists `next` and only then makes it the in-memory collection.
    fn commit(&mut self, next: Vec<Note>, event: &str, id: &NoteId) -> StoreResult<()> {
        if let Err(err) = write_notes(&self.kv, &next) {
            warn!(
                "event={event} module=store status=error error_code=save_failed note_id={id} error={err}"
            );
            return Err(err);
        }
        self.notes = next;
        Ok(())
    }
}

fn write_notes<K: KvStore>(kv: &K, notes: &[Note]) -> StoreResult<()> {
    let json = serde_json::to_string(notes)?;
    kv.set_item(NOTES_KEY, &json)?;
    Ok(())
}
