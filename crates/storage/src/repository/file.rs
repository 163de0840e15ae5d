//! File-based KeyValueRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueRepository, Result, StoreError};

/// File-based implementation of KeyValueRepository.
///
/// Each key is stored as `{base_dir}/{key}.json`. Writes go to a temp file
/// first and are renamed into place, so an interrupted save leaves the
/// previous value intact.
pub struct FileKeyValueRepository {
    base_dir: PathBuf,
}

impl FileKeyValueRepository {
    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file holding `key`.
    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl KeyValueRepository for FileKeyValueRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        tracing::debug!("Loaded {} ({} bytes)", path.display(), value.len());
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Removed {}", path.display());
        }

        Ok(())
    }
}
