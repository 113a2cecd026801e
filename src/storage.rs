use crate::error::{Result, TaskError};
use crate::tasks::TaskStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed persistence for the whole [`TaskStore`]
///
/// Every save rewrites the full file. The write goes to a sibling temporary
/// file which is then renamed over the target, and the previous file is kept
/// as `<file>.bak`.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Location of the last-known-good copy written before each save
    pub fn backup_path(&self) -> PathBuf {
        sibling_path(&self.file_path, |name| format!("{}.bak", name))
    }

    /// Read the store from disk
    ///
    /// A missing file is an empty store. A file whose existence cannot be
    /// checked is a `Persistence` error, never an empty store.
    pub fn load(&self) -> Result<TaskStore> {
        let exists = self.file_path.try_exists().map_err(|source| {
            TaskError::Persistence {
                path: self.file_path.clone(),
                source,
            }
        })?;
        if !exists {
            debug!(path = %self.file_path.display(), "no task data yet, starting empty");
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|source| {
            TaskError::Persistence {
                path: self.file_path.clone(),
                source,
            }
        })?;
        let store: TaskStore =
            toml::from_str(&content).map_err(|e| TaskError::CorruptState {
                path: self.file_path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.file_path.display(), "loaded task data");
        Ok(store)
    }

    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let content = toml::to_string_pretty(store)?;
        self.write_atomic(&content)?;
        debug!(path = %self.file_path.display(), bytes = content.len(), "saved task data");
        Ok(())
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let io_err = |source: std::io::Error| TaskError::Persistence {
            path: self.file_path.clone(),
            source,
        };

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        if self.file_path.is_file() {
            fs::copy(&self.file_path, self.backup_path()).map_err(io_err)?;
        }

        let tmp_path = sibling_path(&self.file_path, |name| {
            format!(".{}.tmp-{}", name, std::process::id())
        });
        fs::write(&tmp_path, content).map_err(io_err)?;
        if let Err(source) = fs::rename(&tmp_path, &self.file_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(source));
        }
        Ok(())
    }
}

fn sibling_path(path: &Path, name: impl FnOnce(&str) -> String) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tasks.toml");
    path.with_file_name(name(file_name))
}
