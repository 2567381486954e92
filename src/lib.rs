//! repomirror: mirror every repository of a GitLab group into private Bitbucket repositories.

pub mod adapters;
pub mod app;
pub mod domain;
mod logging;
pub mod ports;


use std::path::Path;

use adapters::{
    FileErrorLog, FixedDelay, GitCommandAdapter, HttpBitbucketDestination, HttpGitLabSource,
};
use app::{AppContext, commands::sync};

pub use domain::{AppError, MirrorConfig, SyncReport};
pub use logging::init_tracing;

/// Notice printed at the end of every pass, whatever the outcome.
pub const COMPLETION_NOTICE: &str = "All repos are synchronized.";

/// Seed the process environment from a dotenv file.
///
/// With an explicit `path` the file must exist. Without one, the nearest
/// `.env` in the working directory or its ancestors is read when present.
/// Variables already set in the environment win.
pub fn load_env_file(path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                AppError::config_error(format!("Failed to load {}: {}", path.display(), e))
            })?;
        }
        None => match dotenvy::dotenv() {
            Ok(loaded) => tracing::debug!(path = %loaded.display(), "loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(AppError::config_error(format!("Failed to load .env: {}", e))),
        },
    }
    Ok(())
}

/// Mirror every repository of the configured GitLab group to Bitbucket.
///
/// Per-repository failures are appended to the error log and reported in the
/// returned `SyncReport`; only setup failures are returned as errors.
pub fn mirror_group(config: &MirrorConfig) -> Result<SyncReport, AppError> {
    std::fs::create_dir_all(&config.run.work_dir)?;

    let source = HttpGitLabSource::new(&config.gitlab, config.run.http_timeout_secs)?;
    let destination = HttpBitbucketDestination::new(&config.bitbucket, config.run.http_timeout_secs)?;
    let git = GitCommandAdapter::new(config.run.work_dir.clone());
    let error_log = FileErrorLog::new(config.run.error_log.clone());
    let throttle = FixedDelay::from_secs(config.run.delay_secs);

    let ctx = AppContext::new(source, destination, git, error_log, throttle, &config.run.work_dir);
    let report = sync::execute(&ctx);

    if !report.is_clean() {
        tracing::warn!(
            failed = report.failed.len(),
            "Some repositories were skipped, see {}",
            config.run.error_log.display()
        );
    }
    println!("{}", COMPLETION_NOTICE);
    Ok(report)
}
