use std::path::{Path, PathBuf};

use crate::ports::{DestinationHost, ErrorLog, MirrorGit, SourceHost, Throttle};

/// Application context holding dependencies for a mirror run.
pub struct AppContext<S, D, G, L, T>
where
    S: SourceHost,
    D: DestinationHost,
    G: MirrorGit,
    L: ErrorLog,
    T: Throttle,
{
    source: S,
    destination: D,
    git: G,
    error_log: L,
    throttle: T,
    work_dir: PathBuf,
}

impl<S, D, G, L, T> AppContext<S, D, G, L, T>
where
    S: SourceHost,
    D: DestinationHost,
    G: MirrorGit,
    L: ErrorLog,
    T: Throttle,
{
    /// Create a new application context.
    pub fn new(
        source: S,
        destination: D,
        git: G,
        error_log: L,
        throttle: T,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { source, destination, git, error_log, throttle, work_dir: work_dir.into() }
    }

    /// Get a reference to the source host.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the destination host.
    pub fn destination(&self) -> &D {
        &self.destination
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn error_log(&self) -> &L {
        &self.error_log
    }

    pub fn throttle(&self) -> &T {
        &self.throttle
    }

    /// Directory under which mirror clones are created.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}
