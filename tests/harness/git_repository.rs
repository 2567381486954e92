use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

pub(crate) fn run_git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

pub(crate) fn init_bare_repo(path: &Path) {
    fs::create_dir_all(path).expect("create bare repo dir");
    run_git(path, &["init", "--bare", "--initial-branch=main"]);
}

/// Create a repository at `root/name` with two branches and two tags.
pub(crate) fn create_source_repo(root: &Path, name: &str) -> PathBuf {
    let repo_dir = root.join(name);
    fs::create_dir_all(&repo_dir).expect("create source repo dir");
    run_git(&repo_dir, &["init", "--initial-branch=main"]);

    fs::write(repo_dir.join("README.md"), format!("# {name}\n")).expect("write readme");
    run_git(&repo_dir, &["add", "README.md"]);
    run_git(&repo_dir, &["commit", "-m", "Initial commit"]);
    run_git(&repo_dir, &["tag", "v1.0"]);

    run_git(&repo_dir, &["checkout", "-b", "feature/login"]);
    fs::write(repo_dir.join("login.txt"), "login flow\n").expect("write feature file");
    run_git(&repo_dir, &["add", "login.txt"]);
    run_git(&repo_dir, &["commit", "-m", "Add login"]);
    run_git(&repo_dir, &["tag", "-a", "v1.1-rc", "-m", "Release candidate"]);
    run_git(&repo_dir, &["checkout", "main"]);

    repo_dir
}

/// Every `refs/heads/*` and `refs/tags/*` reference with its target.
pub(crate) fn ref_set(path: &Path) -> BTreeMap<String, String> {
    let repo = Repository::open(path).expect("open repository");
    let references = repo.references().expect("list references");
    references
        .filter_map(Result::ok)
        .filter_map(|reference| {
            let name = reference.name()?.to_string();
            if !(name.starts_with("refs/heads/") || name.starts_with("refs/tags/")) {
                return None;
            }
            let target = reference.target()?.to_string();
            Some((name, target))
        })
        .collect()
}
