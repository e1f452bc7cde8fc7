use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Locates the executable for a bare command token. Filesystem existence and
/// permission checks only — process creation belongs to the executor.
#[derive(Clone, Debug, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// A token containing `/` is used verbatim, no search. Otherwise the
    /// search path is walked in the order given; an empty entry means the
    /// current directory. With no usable search path, an interactive
    /// session gets one last try: the literal token as a direct path.
    pub fn resolve(
        &self,
        token: &str,
        path_value: Option<&str>,
        interactive: bool,
    ) -> Option<PathBuf> {
        if token.is_empty() {
            return None;
        }

        if token.contains('/') {
            let candidate = Path::new(token);
            return self
                .is_executable(candidate)
                .then(|| candidate.to_path_buf());
        }

        match path_value {
            Some(path_value) if !path_value.is_empty() => {
                for dir in path_value.split(':') {
                    let candidate = if dir.is_empty() {
                        Path::new(".").join(token)
                    } else {
                        Path::new(dir).join(token)
                    };
                    if self.is_executable(&candidate) {
                        return Some(candidate);
                    }
                }
                None
            }
            _ if interactive => {
                let candidate = Path::new(".").join(token);
                self.is_executable(&candidate).then_some(candidate)
            }
            _ => None,
        }
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        path.metadata()
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
}
