//! GitLab group listing client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, GitLabConfig, RepositoryRef};
use crate::ports::SourceHost;

const PRIVATE_TOKEN: &str = "PRIVATE-TOKEN";

/// HTTP client for the GitLab projects API.
#[derive(Clone)]
pub struct HttpGitLabSource {
    group_id: String,
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitLabSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitLabSource")
            .field("group_id", &self.group_id)
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Fields are optional so one malformed project cannot fail its whole page;
/// gaps surface later as a per-repository replication failure.
#[derive(Debug, Deserialize)]
struct ProjectEntry {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    http_url_to_repo: Option<String>,
}

impl From<ProjectEntry> for RepositoryRef {
    fn from(entry: ProjectEntry) -> Self {
        if entry.path.is_none() || entry.http_url_to_repo.is_none() {
            tracing::warn!(
                path = ?entry.path,
                url = ?entry.http_url_to_repo,
                "project entry is missing its path or clone URL"
            );
        }
        RepositoryRef::new(
            entry.path.unwrap_or_default(),
            entry.http_url_to_repo.unwrap_or_default(),
        )
    }
}

impl HttpGitLabSource {
    pub fn new(config: &GitLabConfig, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            group_id: config.group_id.clone(),
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    fn projects_url(&self) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config_error(format!("Invalid GitLab API URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(["groups", self.group_id.as_str(), "projects"]);
        Ok(url)
    }
}

impl SourceHost for HttpGitLabSource {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RepositoryRef>, AppError> {
        let url = self.projects_url()?;
        tracing::debug!(%url, page, per_page, "requesting project page");

        let response = self
            .client
            .get(url.clone())
            .header(PRIVATE_TOKEN, &self.token)
            .header(ACCEPT, "application/json")
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::UnexpectedStatus { status: status.as_u16(), body });
        }

        let entries: Vec<ProjectEntry> = response.json().map_err(|e| AppError::ParseError {
            what: format!("project page {}", page),
            details: e.to_string(),
        })?;

        Ok(entries.into_iter().map(RepositoryRef::from).collect())
    }
}
