//! Destination host port definition.

use crate::domain::AppError;

/// Port for provisioning repositories on the destination host.
pub trait DestinationHost {
    /// Create a private repository named `name`.
    fn create_repository(&self, name: &str) -> Result<(), AppError>;

    /// Authenticated URL that `git push` should target for `name`.
    fn push_url(&self, name: &str) -> Result<String, AppError>;

    /// Strip secrets owned by this host from text bound for logs.
    fn redact(&self, text: &str) -> String {
        text.to_string()
    }
}
