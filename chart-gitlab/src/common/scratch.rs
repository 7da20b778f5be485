use crate::common::error::{RemoveDirectory, Result};
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Claims a directory path for the duration of a run. Any stale directory left behind by an
/// earlier run is removed on claim, and the directory is removed again when the guard drops,
/// on both the success and failure paths.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Claim `path`, removing any stale directory already present there.
    pub fn claim(path: &Path) -> Result<Self> {
        if path.exists() {
            info!(path = %path.display(), "Removing stale clone directory");
            std::fs::remove_dir_all(path).context(RemoveDirectory {
                path: path.to_path_buf(),
            })?;
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Claim `path` without removing a directory already present there. The guard still
    /// removes the directory on drop.
    pub fn claim_existing(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(error) = std::fs::remove_dir_all(&self.path) {
                warn!(%error, path = %self.path.display(), "Failed to remove clone directory");
            } else {
                info!(path = %self.path.display(), "Removed clone directory");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchDir;

    #[test]
    fn claim_removes_stale_directory() {
        let base = tempfile::tempdir().unwrap();
        let stale = base.path().join("charts");
        std::fs::create_dir_all(stale.join("leftover")).unwrap();

        let guard = ScratchDir::claim(&stale).unwrap();
        assert!(!guard.path().exists());
    }

    #[test]
    fn drop_removes_directory() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("charts");

        {
            let guard = ScratchDir::claim(&dir).unwrap();
            std::fs::create_dir_all(guard.path()).unwrap();
            std::fs::write(guard.path().join("values.yaml"), "image:\n  tag: v1\n").unwrap();
        }

        assert!(!dir.exists());
    }

    #[test]
    fn claim_existing_keeps_directory_until_drop() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("charts");
        std::fs::create_dir_all(&dir).unwrap();

        let guard = ScratchDir::claim_existing(&dir);
        assert!(guard.path().exists());
        drop(guard);
        assert!(!dir.exists());
    }
}
