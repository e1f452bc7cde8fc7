mod file_ops;

use std::collections::VecDeque;
use std::path::PathBuf;

use self::file_ops::FileOps;

/// Most entries the session retains and persists.
pub const MAX_ENTRIES: usize = 4096;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Ordered, append-only record of the raw input lines of a session, capped
/// by dropping the oldest, rewritten to its file in full at shutdown.
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
    file: Option<FileOps>,
}

impl History {
    /// In-memory history; nothing persists. Used for tests and one-shot
    /// command strings.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
            file: None,
        }
    }

    /// Seeds the list from `path` when it exists.
    pub fn open(path: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file = FileOps::new(path);
        let mut entries: VecDeque<String> = file.load()?.into();
        while entries.len() > max_entries {
            entries.pop_front();
        }
        Ok(Self {
            entries,
            max_entries,
            file: Some(file),
        })
    }

    pub fn push(&mut self, entry: &str) {
        let entry = entry.trim_end_matches(['\n', '\r']);
        if entry.trim().is_empty() {
            return;
        }
        self.entries.push_back(entry.to_string());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Rewrites the backing file, oldest entry first.
    pub fn save(&self) -> Result<(), HistoryError> {
        match &self.file {
            Some(file) => file.store(self.entries.iter().map(String::as_str)),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_history_file(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("krill_history_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_push_and_order() {
        let mut history = History::new(16);
        history.push("first");
        history.push("second");
        let entries: Vec<&str> = history.iter().collect();
        assert_eq!(entries, vec!["first", "second"]);
    }

    #[test]
    fn test_blank_lines_not_recorded() {
        let mut history = History::new(16);
        history.push("   ");
        history.push("");
        assert!(history.is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = History::new(3);
        for entry in ["a", "b", "c", "d"] {
            history.push(entry);
        }
        let entries: Vec<&str> = history.iter().collect();
        assert_eq!(entries, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_save_and_reopen_round_trips() {
        let path = temp_history_file("roundtrip");
        let _ = fs::remove_file(&path);

        let mut history = History::open(path.clone(), 16).unwrap();
        history.push("echo one");
        history.push("echo two");
        history.save().unwrap();

        let reopened = History::open(path.clone(), 16).unwrap();
        let entries: Vec<&str> = reopened.iter().collect();
        assert_eq!(entries, vec!["echo one", "echo two"]);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let path = temp_history_file("missing");
        let _ = fs::remove_file(&path);
        let history = History::open(path, 16).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_open_applies_cap() {
        let path = temp_history_file("cap");
        fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let history = History::open(path.clone(), 2).unwrap();
        let entries: Vec<&str> = history.iter().collect();
        assert_eq!(entries, vec!["two", "three"]);

        fs::remove_file(path).unwrap();
    }
}
