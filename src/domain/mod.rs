pub mod config;
pub mod error;
pub mod replication;
pub mod repository;

pub use config::{BitbucketConfig, GitLabConfig, MirrorConfig, RunSettings};
pub use error::AppError;
pub use replication::{
    FailedRepository, ReplicatedRepository, ReplicationError, ReplicationStep, StepResultExt,
    SyncReport,
};
pub use repository::{RepositoryRef, destination_name, mirror_dir_name, sanitize_repo_name};
