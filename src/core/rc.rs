use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const RC_FILE: &str = ".krillrc";

pub fn rc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(RC_FILE))
}

/// Startup file contents as runnable lines; blanks and `#` comments are
/// dropped here so the dispatch path never sees them.
pub fn load(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
