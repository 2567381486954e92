//! Scoped ownership of a transient mirror clone directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A local mirror directory that is removed when the guard goes away.
///
/// The success path calls [`MirrorWorkdir::remove`] to surface cleanup
/// errors; every other exit path relies on `Drop`.
#[derive(Debug)]
pub struct MirrorWorkdir {
    path: PathBuf,
    armed: bool,
}

impl MirrorWorkdir {
    /// Claim `path` for a fresh clone.
    ///
    /// Fails if anything already exists there; the guard never owns a
    /// directory it did not see created.
    pub fn prepare(path: PathBuf) -> Result<Self, AppError> {
        if path.exists() {
            return Err(AppError::Validation {
                reason: format!(
                    "Local directory {} already exists; move it away to mirror this repository",
                    path.display()
                ),
            });
        }
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the directory now and report failures.
    pub fn remove(mut self) -> Result<(), AppError> {
        self.armed = false;
        if self.path.exists() {
            fs::remove_dir_all(&self.path)?;
        }
        Ok(())
    }
}

impl Drop for MirrorWorkdir {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }
        if let Err(err) = fs::remove_dir_all(&self.path) {
            tracing::warn!(path = %self.path.display(), "failed to remove mirror directory: {}", err);
        }
    }
}
