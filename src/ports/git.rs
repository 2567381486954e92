use crate::domain::AppError;
use std::path::Path;

/// Git operations needed to mirror a repository.
pub trait MirrorGit {
    /// Clone every ref of `url` into a bare mirror at `dest`.
    fn clone_mirror(&self, url: &str, dest: &Path) -> Result<(), AppError>;

    /// Point `remote` of the repository at `repo` to `url`.
    fn set_remote_url(&self, repo: &Path, remote: &str, url: &str) -> Result<(), AppError>;

    /// Push all refs of `repo` to `remote` with mirror semantics.
    fn push_mirror(&self, repo: &Path, remote: &str) -> Result<(), AppError>;
}
