use quicknotes_core::db::open_db_in_memory;
use quicknotes_core::{
    KvError, KvResult, KvStore, MemoryKvStore, NoteEditor, NoteId, NoteStore, SqliteKvStore,
    StoreError, Theme, ThemeStore, NOTES_KEY, THEME_KEY,
};
use std::cell::Cell;

/// Memory-backed slots whose reads or writes can be switched to fail.
#[derive(Default)]
struct FlakyKv {
    inner: MemoryKvStore,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

fn backend_error() -> KvError {
    KvError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
}

impl KvStore for FlakyKv {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(backend_error());
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.get() {
            return Err(backend_error());
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> KvResult<()> {
        if self.fail_writes.get() {
            return Err(backend_error());
        }
        self.inner.remove_item(key)
    }
}

#[test]
fn unreadable_notes_slot_opens_empty() {
    let kv = FlakyKv::default();
    kv.inner
        .set_item(NOTES_KEY, r#"[{"id":"1","title":"t","content":"c"}]"#)
        .unwrap();
    kv.fail_reads.set(true);

    let store = NoteStore::open(&kv);
    assert!(store.is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn unreadable_theme_slot_is_light() {
    let kv = FlakyKv::default();
    kv.inner.set_item(THEME_KEY, "dark").unwrap();
    kv.fail_reads.set(true);

    assert_eq!(ThemeStore::new(&kv).current(), Theme::Light);
}

#[test]
fn failed_add_leaves_memory_and_slot_untouched() {
    let kv = FlakyKv::default();
    let mut store = NoteStore::open(&kv);
    let kept = store.add("kept", "1").unwrap();

    kv.fail_writes.set(true);
    let err = store.add("lost", "2").unwrap_err();

    assert!(matches!(err, StoreError::Kv(KvError::Sqlite(_))));
    assert_eq!(store.notes(), [kept.clone()].as_slice());
    assert_eq!(store.load(), vec![kept]);
}

#[test]
fn failed_update_and_delete_keep_previous_state() {
    let kv = FlakyKv::default();
    let mut store = NoteStore::open(&kv);
    let note = store.add("title", "body").unwrap();
    let before = store.notes().to_vec();

    kv.fail_writes.set(true);
    assert!(store.update(&note.id, "changed", "changed").is_err());
    assert!(store.delete(&note.id).is_err());

    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.load(), before);
}

#[test]
fn retried_submit_after_failed_saves_adds_one_note() {
    let kv = FlakyKv::default();
    let mut store = NoteStore::open(&kv);
    let mut editor = NoteEditor::new();
    editor.open_add();
    editor.set_title("t");
    editor.set_content("c");

    kv.fail_writes.set(true);
    assert!(editor.submit(&mut store).is_err());
    assert!(editor.submit(&mut store).is_err());
    assert!(editor.is_open());
    assert!(store.is_empty());

    kv.fail_writes.set(false);
    let note = editor.submit(&mut store).unwrap();

    assert_eq!(store.notes(), [note.clone()].as_slice());
    assert_eq!(store.load(), vec![note]);
}

#[test]
fn loaded_max_id_does_not_repeat() {
    let kv = MemoryKvStore::new();
    kv.set_item(
        NOTES_KEY,
        r#"[{"id":"18446744073709551615","title":"edge","content":"max"}]"#,
    )
    .unwrap();

    let mut store = NoteStore::open(&kv);
    let first = store.add("a", "").unwrap();
    let second = store.add("b", "").unwrap();

    let ids: Vec<&NoteId> = store.notes().iter().map(|note| &note.id).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(first.id.as_str(), "18446744073709551615");
    assert_ne!(second.id.as_str(), "18446744073709551615");
    assert_ne!(first.id, second.id);
}

#[test]
fn sqlite_query_failure_surfaces_as_sqlite_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE kv;").unwrap();
    let kv = SqliteKvStore::new(&conn);

    let err = kv.set_item(NOTES_KEY, "[]").unwrap_err();
    assert!(matches!(err, KvError::Sqlite(_)));
}
