use crate::client::{FileStore, Session};
use std::path::{Path, PathBuf};

/// Directory under `$HOME` holding client state.
pub const STATE_DIR: &str = ".mockid";
pub const SESSION_FILE_NAME: &str = "session.json";

/// Options shared by every client subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub session_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(session_file: Option<PathBuf>) -> Self {
        Self {
            session_file: session_file.unwrap_or_else(default_session_file),
        }
    }

    /// Open the on-disk session.
    #[must_use]
    pub fn session(&self) -> Session<FileStore> {
        Session::new(FileStore::new(&self.session_file))
    }
}

/// `$HOME/.mockid/session.json`, relative to the working directory when
/// `HOME` is unset.
#[must_use]
pub fn default_session_file() -> PathBuf {
    let home = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
    session_file_in(&home)
}

fn session_file_in(home: &Path) -> PathBuf {
    home.join(STATE_DIR).join(SESSION_FILE_NAME)
}
