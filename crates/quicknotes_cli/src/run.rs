//! Dispatches parsed commands into the core stores.

use crate::cli::{Cli, Commands, ThemeAction};
use log::info;
use quicknotes_core::db::{open_db, DbError};
use quicknotes_core::{
    default_log_level, init_logging, render_notes, KvError, KvStore, NoteEditor, NoteId,
    NoteStore, SqliteKvStore, StoreError, ThemeStore,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub enum CliError {
    Logging(String),
    Db(DbError),
    Kv(KvError),
    Store(StoreError),
    Io(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "failed to open database: {err}"),
            Self::Kv(err) => write!(f, "storage error: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
            Self::Kv(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<KvError> for CliError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        start_logging(cli.log_level.as_deref(), log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let kv = SqliteKvStore::new(&conn);
    info!("event=cli_command module=cli status=start command={}", command_name(&cli.command));

    match cli.command {
        Commands::List => list(kv, out),
        Commands::Add { title, content } => add(kv, &title, &content, out),
        Commands::Edit { id, title, content } => {
            edit(kv, &NoteId::from(id), title, content, out)
        }
        Commands::Delete { id } => delete(kv, &NoteId::from(id), out),
        Commands::Theme { action } => theme(kv, action, out),
    }
}

fn start_logging(level: Option<&str>, log_dir: &Path) -> Result<(), CliError> {
    let log_dir = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(log_dir)
    };
    init_logging(
        level.unwrap_or_else(|| default_log_level()),
        &log_dir.to_string_lossy(),
    )
    .map_err(CliError::Logging)
}

fn list<K: KvStore>(kv: K, out: &mut impl Write) -> Result<(), CliError> {
    let store = NoteStore::open(kv);
    write!(out, "{}", render_notes(store.notes()))?;
    if store.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

fn add<K: KvStore>(kv: K, title: &str, content: &str, out: &mut impl Write) -> Result<(), CliError> {
    let mut store = NoteStore::open(kv);
    let mut editor = NoteEditor::new();
    editor.open_add();
    editor.set_title(title);
    editor.set_content(content);
    let note = editor.submit(&mut store)?;
    writeln!(out, "Note added: {}", note.id)?;
    Ok(())
}

fn edit<K: KvStore>(
    kv: K,
    id: &NoteId,
    title: Option<String>,
    content: Option<String>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut store = NoteStore::open(kv);
    let mut editor = NoteEditor::new();
    editor.open_edit(&store, id)?;
    if let Some(title) = title {
        editor.set_title(title);
    }
    if let Some(content) = content {
        editor.set_content(content);
    }
    let note = editor.submit(&mut store)?;
    writeln!(out, "Note updated: {}", note.id)?;
    Ok(())
}

fn delete<K: KvStore>(kv: K, id: &NoteId, out: &mut impl Write) -> Result<(), CliError> {
    let mut store = NoteStore::open(kv);
    let existed = store.get(id).is_some();
    store.delete(id)?;
    if existed {
        writeln!(out, "Note deleted: {id}")?;
    }
    Ok(())
}

fn theme<K: KvStore>(
    kv: K,
    action: Option<ThemeAction>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let themes = ThemeStore::new(kv);
    let current = match action {
        Some(ThemeAction::Toggle) => themes.toggle()?,
        None => themes.current(),
    };
    writeln!(out, "{current} {}", current.toggle_icon())?;
    Ok(())
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List => "list",
        Commands::Add { .. } => "add",
        Commands::Edit { .. } => "edit",
        Commands::Delete { .. } => "delete",
        Commands::Theme { .. } => "theme",
    }
}
