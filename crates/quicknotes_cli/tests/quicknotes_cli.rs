use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn quicknotes(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quicknotes").unwrap();
    cmd.env_remove("QUICKNOTES_LOG_DIR")
        .env_remove("QUICKNOTES_LOG_LEVEL")
        .env("QUICKNOTES_DB", db);
    cmd
}

fn added_id(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .trim()
        .strip_prefix("Note added: ")
        .expect("add should print the new id")
        .to_string()
}

#[test]
fn list_on_fresh_database_shows_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    quicknotes(&dir.path().join("notes.sqlite3"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Notes Yet"))
        .stdout(predicate::str::contains("Add Your First Note"));
}

#[test]
fn add_edit_delete_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("notes.sqlite3");

    let output = quicknotes(&db)
        .args(["add", "--title", "  Groceries ", "--content", "milk"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    quicknotes(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[{id}] Groceries")))
        .stdout(predicate::str::contains("    milk"));

    quicknotes(&db)
        .args(["edit", id.as_str(), "--content", "milk, eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Note updated: {id}")));

    quicknotes(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[{id}] Groceries")))
        .stdout(predicate::str::contains("milk, eggs"));

    quicknotes(&db)
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    quicknotes(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Notes Yet"));
}

#[test]
fn newest_note_is_listed_first() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("notes.sqlite3");

    for title in ["older", "newer"] {
        quicknotes(&db)
            .args(["add", "--title", title])
            .assert()
            .success();
    }

    let output = quicknotes(&db).arg("list").output().unwrap();
    let listing = String::from_utf8_lossy(&output.stdout);
    let newer = listing.find("newer").unwrap();
    let older = listing.find("older").unwrap();
    assert!(newer < older);
}

#[test]
fn editing_unknown_note_fails() {
    let dir = tempfile::tempdir().unwrap();
    quicknotes(&dir.path().join("notes.sqlite3"))
        .args(["edit", "12345", "--title", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("note not found: 12345"));
}

#[test]
fn deleting_unknown_note_succeeds_quietly() {
    let dir = tempfile::tempdir().unwrap();
    quicknotes(&dir.path().join("notes.sqlite3"))
        .args(["delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn theme_toggle_persists() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("notes.sqlite3");

    quicknotes(&db)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("light"));

    quicknotes(&db)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dark"));

    quicknotes(&db)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dark"));
}

#[test]
fn log_dir_flag_writes_log_files() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    quicknotes(&dir.path().join("notes.sqlite3"))
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["--log-level", "info", "add", "--title", "logged"])
        .assert()
        .success();

    let entries = std::fs::read_dir(&log_dir).unwrap().count();
    assert!(entries > 0);
}

#[test]
fn log_level_without_log_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    quicknotes(&dir.path().join("notes.sqlite3"))
        .args(["--log-level", "debug", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--log-dir"));
}
