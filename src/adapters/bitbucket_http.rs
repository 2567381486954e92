//! Bitbucket repository provisioning client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, BitbucketConfig};
use crate::ports::DestinationHost;

const REDACTED: &str = "***";

/// HTTP client for the Bitbucket Cloud repositories API.
#[derive(Clone)]
pub struct HttpBitbucketDestination {
    user: String,
    password: String,
    workspace: String,
    project_key: String,
    api_url: Url,
    git_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpBitbucketDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBitbucketDestination")
            .field("user", &self.user)
            .field("workspace", &self.workspace)
            .field("project_key", &self.project_key)
            .field("api_url", &self.api_url)
            .field("git_url", &self.git_url)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    scm: &'a str,
    is_private: bool,
    project: ProjectKey<'a>,
}

#[derive(Debug, Serialize)]
struct ProjectKey<'a> {
    key: &'a str,
}

impl HttpBitbucketDestination {
    pub fn new(config: &BitbucketConfig, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            user: config.user.clone(),
            password: config.password.clone(),
            workspace: config.workspace.clone(),
            project_key: config.project_key.clone(),
            api_url: config.api_url.clone(),
            git_url: config.git_url.clone(),
            client,
        })
    }

    fn repository_url(&self, name: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Invalid Bitbucket API URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repositories", self.workspace.as_str(), name]);
        Ok(url)
    }

    /// Password as it appears inside a URL's userinfo.
    fn encoded_password(&self) -> Option<String> {
        let mut url = Url::parse("https://redact.invalid").ok()?;
        url.set_password(Some(&self.password)).ok()?;
        url.password().map(str::to_string)
    }
}

impl DestinationHost for HttpBitbucketDestination {
    fn create_repository(&self, name: &str) -> Result<(), AppError> {
        let url = self.repository_url(name)?;
        let request = CreateRepositoryRequest {
            scm: "git",
            is_private: true,
            project: ProjectKey { key: &self.project_key },
        };
        tracing::debug!(%url, "creating destination repository");

        let response = self
            .client
            .post(url.clone())
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => {
                let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
                Err(AppError::UnexpectedStatus { status, body })
            }
        }
    }

    fn push_url(&self, name: &str) -> Result<String, AppError> {
        let mut url = self.git_url.clone();
        let repo_segment = format!("{name}.git");
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Invalid Bitbucket git URL: {}", self.git_url))
            })?
            .pop_if_empty()
            .extend([self.workspace.as_str(), repo_segment.as_str()]);

        if url.scheme() != "file" && url.has_host() {
            url.set_username(&self.user).map_err(|_| {
                AppError::config_error(format!("Cannot embed credentials into {}", self.git_url))
            })?;
            url.set_password(Some(&self.password)).map_err(|_| {
                AppError::config_error(format!("Cannot embed credentials into {}", self.git_url))
            })?;
        }

        Ok(url.to_string())
    }

    fn redact(&self, text: &str) -> String {
        if self.password.is_empty() {
            return text.to_string();
        }
        let mut redacted = text.replace(&self.password, REDACTED);
        if let Some(encoded) = self.encoded_password().filter(|encoded| *encoded != self.password) {
            redacted = redacted.replace(&encoded, REDACTED);
        }
        redacted
    }
}
