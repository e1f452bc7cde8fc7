use crate::error::ShellError;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Tilde expansion. `~user` forms are left alone.
    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        if rest.is_empty() {
            return dirs::home_dir().ok_or(ShellError::HomeDirNotFound);
        }

        match rest.strip_prefix('/') {
            Some(tail) => {
                let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                Ok(home.join(tail))
            }
            None => Ok(PathBuf::from(path)),
        }
    }
}
