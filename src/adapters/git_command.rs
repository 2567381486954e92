use crate::domain::AppError;
use crate::ports::MirrorGit;
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Mirrors repositories with the `git` CLI, using libgit2 for local config edits.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd.unwrap_or(&self.root));
        // Never block the run on an interactive credential prompt.
        command.env("GIT_TERMINAL_PROMPT", "0");
        tracing::debug!(command = %format!("git {}", args.join(" ")), "running git");

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn path_str(path: &Path) -> Result<&str, AppError> {
    path.to_str().ok_or_else(|| AppError::Validation {
        reason: format!("Path contains invalid unicode: {}", path.display()),
    })
}

impl MirrorGit for GitCommandAdapter {
    fn clone_mirror(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        self.run(&["clone", "--mirror", url, path_str(dest)?], None)?;
        Ok(())
    }

    fn set_remote_url(&self, repo: &Path, remote: &str, url: &str) -> Result<(), AppError> {
        let repository = Repository::open(repo).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })?;
        // The URL may carry credentials, so it stays out of the error text.
        repository.remote_set_url(remote, url).map_err(|e| AppError::GitError {
            command: format!("git2::Repository::remote_set_url({remote})"),
            details: e.message().to_string(),
        })
    }

    fn push_mirror(&self, repo: &Path, remote: &str) -> Result<(), AppError> {
        self.run(&["push", "--mirror", remote], Some(repo))?;
        Ok(())
    }
}
