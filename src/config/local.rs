use crate::core::Storage;
use crate::utils::error::{ArtifactError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`.
///
/// Missing directories are not created; writing into one fails.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|source| ArtifactError::ReadError {
            path: full_path.display().to_string(),
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|source| ArtifactError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }

    fn location(&self, path: &str) -> String {
        self.resolve(path).display().to_string()
    }
}
