use crate::domain::AppError;

/// Append-only sink for per-repository failures.
pub trait ErrorLog {
    /// Record that mirroring `source_url` failed with `message`.
    fn append(&self, source_url: &str, message: &str) -> Result<(), AppError>;
}
