//! File-backed error log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ErrorLog;

/// Appends one `Repo: <url>, Error: <message>` line per failure.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render a log line. Backslashes and line breaks in the message are escaped
/// so each failure stays on one line and the raw text can be recovered.
pub fn format_entry(source_url: &str, message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for ch in message.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    format!("Repo: {source_url}, Error: {escaped}")
}

impl ErrorLog for FileErrorLog {
    fn append(&self, source_url: &str, message: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", format_entry(source_url, message))?;
        Ok(())
    }
}
