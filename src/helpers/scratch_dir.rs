use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::GitlocResult;

/// Scratch directory for one repository analysis, removed on drop so every
/// exit path of the analyze step releases its working state. Removal is
/// best-effort; a failure is logged and never propagates.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create(root: &Path, name: &str) -> GitlocResult<Self> {
        let path = root.join(name);
        if path.exists() {
            // Leftover from an aborted run; start clean.
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            log::warn!("⚠️ Failed to clean up scratch directory {}: {}", self.path.display(), e);
        }
    }
}
