//! One full list-then-replicate pass.

use crate::app::AppContext;
use crate::app::commands::{list, replicate};
use crate::domain::{FailedRepository, SyncReport};
use crate::ports::{DestinationHost, ErrorLog, MirrorGit, SourceHost, Throttle};

/// List the source group and replicate each repository in turn.
///
/// A failing repository is written to the error log and skipped; the pass
/// always reaches the end of the list.
pub fn execute<S, D, G, L, T>(ctx: &AppContext<S, D, G, L, T>) -> SyncReport
where
    S: SourceHost,
    D: DestinationHost,
    G: MirrorGit,
    L: ErrorLog,
    T: Throttle,
{
    let repositories = list::list_repositories(ctx.source());
    let mut report = SyncReport { listed: repositories.len(), ..SyncReport::default() };

    for repo in &repositories {
        match replicate::execute(ctx, repo) {
            Ok(done) => {
                tracing::info!("Local repo files have been deleted successfully.");
                report.replicated.push(done);
            }
            Err(err) => {
                let message = ctx.destination().redact(&err.to_string());
                tracing::error!("Error occurred: Repo: {}, Error: {}", repo.source_url, message);

                if let Err(log_err) = ctx.error_log().append(&repo.source_url, &message) {
                    tracing::warn!("Failed to write error log entry: {}", log_err);
                }

                report.failed.push(FailedRepository {
                    source_url: repo.source_url.clone(),
                    step: err.step,
                    message,
                });
            }
        }
    }

    report
}
