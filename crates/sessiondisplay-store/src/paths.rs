//! Path resolution for the session data directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "SESSIONDISPLAY_HOME";

/// Resolves the files of a session data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve from `SESSIONDISPLAY_HOME`, falling back to `~/.sessiondisplay`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::at(dir));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::at(home.join(".sessiondisplay")))
    }

    /// Use an explicit data directory
    pub fn at(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// One `SessionEntryRow` per line, in logged order
    pub fn session_entries_file(&self) -> PathBuf {
        self.data_dir.join("session_entries.jsonl")
    }

    pub fn test_lists_file(&self) -> PathBuf {
        self.data_dir.join("test_lists.jsonl")
    }

    /// Links between test lists and the sessions their cases came from
    pub fn test_list_sessions_file(&self) -> PathBuf {
        self.data_dir.join("test_list_sessions.jsonl")
    }

    pub fn evaluation_criteria_file(&self) -> PathBuf {
        self.data_dir.join("evaluation_criteria.jsonl")
    }

    pub fn evaluation_results_file(&self) -> PathBuf {
        self.data_dir.join("evaluation_results.jsonl")
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Every JSONL file the store reads
    pub fn data_files(&self) -> Vec<PathBuf> {
        vec![
            self.session_entries_file(),
            self.test_lists_file(),
            self.test_list_sessions_file(),
            self.evaluation_criteria_file(),
            self.evaluation_results_file(),
        ]
    }
}
