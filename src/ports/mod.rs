mod destination_host;
mod error_log;
mod git;
mod source_host;
mod throttle;

pub use destination_host::DestinationHost;
pub use error_log::ErrorLog;
pub use git::MirrorGit;
pub use source_host::{PAGE_SIZE, SourceHost};
pub use throttle::{NoDelay, Throttle};
