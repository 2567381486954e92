//! Outcome types for replicating repositories.

use std::fmt;

use thiserror::Error;

use crate::domain::AppError;

/// The ordered steps of a single repository replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicationStep {
    SanitizeName,
    LocalDirectory,
    MirrorClone,
    CreateDestination,
    RepointRemote,
    MirrorPush,
    Cleanup,
}

impl ReplicationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicationStep::SanitizeName => "sanitize name",
            ReplicationStep::LocalDirectory => "prepare local directory",
            ReplicationStep::MirrorClone => "mirror clone",
            ReplicationStep::CreateDestination => "create destination repository",
            ReplicationStep::RepointRemote => "repoint remote",
            ReplicationStep::MirrorPush => "mirror push",
            ReplicationStep::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for ReplicationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replication that stopped at `step`.
#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct ReplicationError {
    pub step: ReplicationStep,
    #[source]
    pub source: AppError,
}

impl ReplicationError {
    pub fn new(step: ReplicationStep, source: AppError) -> Self {
        Self { step, source }
    }
}

/// Extension for tagging a step result with the step it belongs to.
pub trait StepResultExt<T> {
    fn at_step(self, step: ReplicationStep) -> Result<T, ReplicationError>;
}

impl<T> StepResultExt<T> for Result<T, AppError> {
    fn at_step(self, step: ReplicationStep) -> Result<T, ReplicationError> {
        self.map_err(|source| ReplicationError::new(step, source))
    }
}

/// A repository that reached the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicatedRepository {
    /// Sanitized destination repository name.
    pub name: String,
    pub source_url: String,
}

/// A repository that was logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRepository {
    pub source_url: String,
    pub step: ReplicationStep,
    /// Redacted error text, exactly as written to the error log.
    pub message: String,
}

/// Result of one full list-then-replicate pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub listed: usize,
    pub replicated: Vec<ReplicatedRepository>,
    pub failed: Vec<FailedRepository>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
