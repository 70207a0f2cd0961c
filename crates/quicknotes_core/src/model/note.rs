//! Note domain model.
//!
//! # Responsibility
//! - Define the record persisted in the notes slot.
//! - Generate creation-time derived note ids.
//!
//! # Invariants
//! - `id` is unique within one collection and never reassigned on edit.
//! - Ids are decimal Unix epoch milliseconds, strictly increasing per generator
//!   until `u64::MAX` has been seen, and unique per generator always.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier of a note inside its collection.
///
/// Serialized as a bare JSON string, e.g. `"1718000000000"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of a timestamp-derived id, if it is one.
    fn millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// User-authored title/content pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Creates a note with surrounding whitespace trimmed from both fields.
    pub fn new(id: NoteId, title: &str, content: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }
}

/// Issues timestamp-derived note ids.
///
/// A fresh id is the current Unix time in milliseconds, bumped to one past
/// the newest id seen so far when the clock has not advanced (or went back).
/// Once the newest id is `u64::MAX`, ids are taken from the first value at or
/// after the current time that has not been seen.
#[derive(Debug, Default)]
pub struct NoteIdGenerator {
    last_issued: u64,
    seen: BTreeSet<u64>,
}

impl NoteIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records ids that exist in the collection or were just committed.
    pub fn observe<'a>(&mut self, ids: impl IntoIterator<Item = &'a NoteId>) {
        for millis in ids.into_iter().filter_map(NoteId::millis) {
            self.last_issued = self.last_issued.max(millis);
            self.seen.insert(millis);
        }
    }

    /// Id the next `next_id` call would issue, without reserving it.
    pub fn peek(&self) -> NoteId {
        self.peek_at(now_millis())
    }

    pub fn next_id(&mut self) -> NoteId {
        self.next_id_at(now_millis())
    }

    fn peek_at(&self, now: u64) -> NoteId {
        let millis = match self.last_issued.checked_add(1) {
            Some(bumped) => now.max(bumped),
            None => self.first_unseen_from(now),
        };
        NoteId(millis.to_string())
    }

    fn next_id_at(&mut self, now: u64) -> NoteId {
        let id = self.peek_at(now);
        self.observe([&id]);
        id
    }

    fn first_unseen_from(&self, start: u64) -> u64 {
        let mut candidate = start;
        while self.seen.contains(&candidate) {
            candidate = candidate.wrapping_add(1);
        }
        candidate
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
