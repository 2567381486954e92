//! Repository identity and naming rules.

use crate::domain::AppError;

/// A repository to mirror: the destination name and where to clone it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Raw project path as reported by the source host.
    pub name: String,
    /// HTTP clone URL on the source host.
    pub source_url: String,
}

impl RepositoryRef {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self { name: name.into(), source_url: source_url.into() }
    }
}

/// Normalize a project path into a destination repository slug.
///
/// Lower-cases the input and drops every character that is not an ASCII
/// alphanumeric, `_`, `-` or `.`. Nothing is substituted, so distinct inputs
/// may collapse to the same slug.
pub fn sanitize_repo_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Like [`sanitize_repo_name`] but rejects names that sanitize to nothing.
pub fn destination_name(raw: &str) -> Result<String, AppError> {
    let name = sanitize_repo_name(raw);
    if name.is_empty() {
        return Err(AppError::Validation {
            reason: format!("Repository name '{raw}' is empty after sanitization"),
        });
    }
    Ok(name)
}

/// Directory name for the bare mirror clone of `source_url`.
///
/// Takes the last path segment, strips one `.git` suffix if present and
/// appends `.git` again, so `group/app` and `group/app.git` both map to
/// `app.git`.
pub fn mirror_dir_name(source_url: &str) -> Result<String, AppError> {
    let trimmed = source_url.trim().trim_end_matches('/');
    let segment = trimmed.rsplit(['/', '\\', ':']).next().unwrap_or_default();
    let stem = segment.strip_suffix(".git").unwrap_or(segment);

    if stem.is_empty() || stem == "." || stem == ".." {
        return Err(AppError::Validation {
            reason: format!("Cannot derive a local directory name from '{source_url}'"),
        });
    }

    Ok(format!("{stem}.git"))
}
