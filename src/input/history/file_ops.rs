use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use super::HistoryError;

pub(super) struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// A missing file is an empty history, not an error.
    pub fn load(&self) -> Result<Vec<String>, HistoryError> {
        let mut entries = Vec::new();

        if self.file_path.exists() {
            let file = File::open(&self.file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    entries.push(line);
                }
            }
        }

        Ok(entries)
    }

    /// Truncates and rewrites the whole file, one entry per line.
    pub fn store<'a>(&self, entries: impl Iterator<Item = &'a str>) -> Result<(), HistoryError> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
