//! Pacing between successive replications.

/// Capability invoked after each successful replication.
pub trait Throttle {
    fn pause(&self);
}

/// Throttle that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn pause(&self) {}
}
