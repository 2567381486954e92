//! Enumerate the repositories of the source group.

use crate::domain::RepositoryRef;
use crate::ports::{PAGE_SIZE, SourceHost};

/// Collect every repository the source host lists, page by page.
///
/// Pagination ends at the first empty page. A failed page also ends it:
/// the failure is logged and whatever earlier pages returned is kept.
pub fn list_repositories<S: SourceHost>(source: &S) -> Vec<RepositoryRef> {
    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
        match source.fetch_page(page, PAGE_SIZE) {
            Ok(items) if items.is_empty() => break,
            Ok(items) => {
                tracing::debug!(page, count = items.len(), "fetched project page");
                repositories.extend(items);
                page += 1;
            }
            Err(err) => {
                tracing::warn!(page, "An error occurred while importing projects: {}", err);
                break;
            }
        }
    }

    if repositories.is_empty() {
        tracing::info!("No project found in the group {}", source.group_id());
    } else {
        tracing::info!(count = repositories.len(), "Found {} projects", repositories.len());
    }

    repositories
}
