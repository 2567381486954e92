use std::sync::Mutex;

use crate::domain::{AppError, RepositoryRef};
use crate::ports::SourceHost;

/// Serves canned pages; any page past the end is empty.
pub struct FakeSource {
    group_id: String,
    pages: Vec<Result<Vec<RepositoryRef>, u16>>,
    pub requested: Mutex<Vec<(u32, u32)>>,
}

impl FakeSource {
    pub fn new(pages: Vec<Result<Vec<RepositoryRef>, u16>>) -> Self {
        Self { group_id: "4242".to_string(), pages, requested: Mutex::new(Vec::new()) }
    }

    /// `count` generated repositories spread over pages of `per_page`.
    pub fn with_items(count: usize, per_page: usize) -> Self {
        let items = generated_repos(count);
        Self::new(items.chunks(per_page).map(|chunk| Ok(chunk.to_vec())).collect())
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().iter().map(|(page, _)| *page).collect()
    }
}

pub fn generated_repos(count: usize) -> Vec<RepositoryRef> {
    (0..count)
        .map(|i| RepositoryRef::new(format!("repo-{i}"), format!("https://gitlab.test/acme/repo-{i}.git")))
        .collect()
}

impl SourceHost for FakeSource {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRef>, AppError> {
        self.requested.lock().unwrap().push((page, per_page));
        match self.pages.get(page as usize - 1) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(status)) => {
                Err(AppError::UnexpectedStatus { status: *status, body: "simulated".to_string() })
            }
            None => Ok(Vec::new()),
        }
    }
}
