//! Source host port definition.

use crate::domain::{AppError, RepositoryRef};

/// Projects requested per listing page.
pub const PAGE_SIZE: u32 = 100;

/// Port for listing the repositories of a source group.
pub trait SourceHost {
    /// Identifier of the listed group, used in user-facing messages.
    fn group_id(&self) -> &str;

    /// Fetch one page (1-based) of projects.
    ///
    /// An empty vector means there are no more pages. Any non-success
    /// response is an error.
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRef>, AppError>;
}
