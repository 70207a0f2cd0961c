use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./.quicknotes/quicknotes.sqlite3";

#[derive(Parser, Debug)]
#[command(name = "quicknotes", version, about = "Quick notes kept in a local database")]
pub struct Cli {
    /// SQLite file holding notes and preferences
    #[arg(long, env = "QUICKNOTES_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Directory for rolling log files (logging is off when unset)
    #[arg(long, env = "QUICKNOTES_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace, debug, info, warn or error; only valid together with --log-dir
    #[arg(long, env = "QUICKNOTES_LOG_LEVEL", requires = "log_dir")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all notes, newest first
    List,
    /// Add a new note
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        content: String,
    },
    /// Edit an existing note; omitted fields keep their value
    Edit {
        /// Note id as shown by `list`
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note by id
    Delete { id: String },
    /// Show or toggle the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Switch between light and dark
    Toggle,
}
