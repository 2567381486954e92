use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::MirrorGit;

/// Records git calls and materializes clone directories on disk.
#[derive(Default)]
pub struct FakeGit {
    pub clones: Mutex<Vec<(String, PathBuf)>>,
    pub remotes: Mutex<Vec<(PathBuf, String, String)>>,
    pub pushes: Mutex<Vec<PathBuf>>,
    fail_clone: HashSet<String>,
    fail_push: HashSet<String>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `clone_mirror` fail for `url`.
    pub fn failing_clone(mut self, url: &str) -> Self {
        self.fail_clone.insert(url.to_string());
        self
    }

    /// Make `push_mirror` fail for the mirror directory named `dir_name`.
    pub fn failing_push(mut self, dir_name: &str) -> Self {
        self.fail_push.insert(dir_name.to_string());
        self
    }

    pub fn cloned_urls(&self) -> Vec<String> {
        self.clones.lock().unwrap().iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn pushed_dirs(&self) -> Vec<PathBuf> {
        self.pushes.lock().unwrap().clone()
    }
}

impl MirrorGit for FakeGit {
    fn clone_mirror(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        self.clones.lock().unwrap().push((url.to_string(), dest.to_path_buf()));
        if self.fail_clone.contains(url) {
            // A failed clone can still leave a partial directory behind.
            fs::create_dir_all(dest)?;
            return Err(AppError::GitError {
                command: format!("git clone --mirror {url}"),
                details: "fatal: repository not found".to_string(),
            });
        }
        fs::create_dir_all(dest.join("refs"))?;
        fs::write(dest.join("HEAD"), "ref: refs/heads/main\n")?;
        Ok(())
    }

    fn set_remote_url(&self, repo: &Path, remote: &str, url: &str) -> Result<(), AppError> {
        self.remotes.lock().unwrap().push((repo.to_path_buf(), remote.to_string(), url.to_string()));
        Ok(())
    }

    fn push_mirror(&self, repo: &Path, _remote: &str) -> Result<(), AppError> {
        self.pushes.lock().unwrap().push(repo.to_path_buf());
        let dir_name = repo.file_name().and_then(|name| name.to_str()).unwrap_or_default();
        if self.fail_push.contains(dir_name) {
            let url = self
                .remotes
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(path, _, _)| path == repo)
                .map(|(_, _, url)| url.clone())
                .unwrap_or_default();
            return Err(AppError::GitError {
                command: "git push --mirror origin".to_string(),
                details: format!("fatal: unable to access '{url}': The requested URL returned error: 403"),
            });
        }
        Ok(())
    }
}
