//! Mirror one repository from the source host to the destination host.

use crate::app::AppContext;
use crate::app::commands::workdir::MirrorWorkdir;
use crate::domain::{
    AppError, RepositoryRef, ReplicatedRepository, ReplicationError, ReplicationStep, StepResultExt,
    destination_name, mirror_dir_name,
};
use crate::ports::{DestinationHost, ErrorLog, MirrorGit, SourceHost, Throttle};

const PUSH_REMOTE: &str = "origin";

/// Replicate `repo`: clone a mirror, create the destination, push every ref,
/// remove the local clone and pause.
///
/// Each step only runs if the previous one succeeded. The local clone is
/// removed on every exit path.
pub fn execute<S, D, G, L, T>(
    ctx: &AppContext<S, D, G, L, T>,
    repo: &RepositoryRef,
) -> Result<ReplicatedRepository, ReplicationError>
where
    S: SourceHost,
    D: DestinationHost,
    G: MirrorGit,
    L: ErrorLog,
    T: Throttle,
{
    let name = destination_name(&repo.name).at_step(ReplicationStep::SanitizeName)?;

    if repo.source_url.trim().is_empty() {
        return Err(AppError::Validation {
            reason: format!("Project '{}' has no clone URL", repo.name),
        })
        .at_step(ReplicationStep::LocalDirectory);
    }
    let dir_name = mirror_dir_name(&repo.source_url).at_step(ReplicationStep::LocalDirectory)?;
    let workdir = MirrorWorkdir::prepare(ctx.work_dir().join(dir_name))
        .at_step(ReplicationStep::LocalDirectory)?;

    tracing::info!("Cloning: {}", repo.source_url);
    ctx.git()
        .clone_mirror(&repo.source_url, workdir.path())
        .at_step(ReplicationStep::MirrorClone)?;

    tracing::info!("Creating a repo on Bitbucket: {}", name);
    ctx.destination().create_repository(&name).at_step(ReplicationStep::CreateDestination)?;
    tracing::info!("Repo successfully created on Bitbucket.");

    let push_url = ctx.destination().push_url(&name).at_step(ReplicationStep::RepointRemote)?;
    ctx.git()
        .set_remote_url(workdir.path(), PUSH_REMOTE, &push_url)
        .at_step(ReplicationStep::RepointRemote)?;

    tracing::info!("Pushing all branches and tags to Bitbucket...");
    ctx.git().push_mirror(workdir.path(), PUSH_REMOTE).at_step(ReplicationStep::MirrorPush)?;

    tracing::info!("Deleting local repo files: {}", workdir.path().display());
    workdir.remove().at_step(ReplicationStep::Cleanup)?;

    ctx.throttle().pause();

    Ok(ReplicatedRepository { name, source_url: repo.source_url.clone() })
}
