//! Mirror configuration domain models.
//!
//! All values come from the process environment (optionally seeded from a
//! `.env` file) and are read exactly once at startup. Components receive the
//! resulting [`MirrorConfig`] explicitly and never consult the environment.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

pub const ENV_GITLAB_GROUP_ID: &str = "GITLAB_GROUP_ID";
pub const ENV_GITLAB_TOKEN: &str = "GITLAB_TOKEN";
pub const ENV_BITBUCKET_USER: &str = "BITBUCKET_USER";
pub const ENV_BITBUCKET_PASS: &str = "BITBUCKET_PASS";
pub const ENV_BITBUCKET_WORKSPACE: &str = "BITBUCKET_WORKSPACE";
pub const ENV_BITBUCKET_PROJECT: &str = "BITBUCKET_PROJECT";

pub const ENV_GITLAB_API_URL: &str = "GITLAB_API_URL";
pub const ENV_BITBUCKET_API_URL: &str = "BITBUCKET_API_URL";
pub const ENV_BITBUCKET_GIT_URL: &str = "BITBUCKET_GIT_URL";
pub const ENV_DELAY_SECS: &str = "MIRROR_DELAY_SECS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "MIRROR_HTTP_TIMEOUT_SECS";
pub const ENV_ERROR_LOG: &str = "MIRROR_ERROR_LOG";

/// Every variable that must be present for a run to start.
pub const REQUIRED_VARS: [&str; 6] = [
    ENV_GITLAB_GROUP_ID,
    ENV_GITLAB_TOKEN,
    ENV_BITBUCKET_USER,
    ENV_BITBUCKET_PASS,
    ENV_BITBUCKET_WORKSPACE,
    ENV_BITBUCKET_PROJECT,
];

/// Complete configuration for one mirror run.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Source host settings.
    pub gitlab: GitLabConfig,
    /// Destination host settings.
    pub bitbucket: BitbucketConfig,
    /// Execution settings.
    pub run: RunSettings,
}

/// GitLab source settings.
#[derive(Clone)]
pub struct GitLabConfig {
    /// Group whose projects are mirrored.
    pub group_id: String,
    /// Private token sent with every listing request.
    pub token: String,
    /// REST API root, e.g. `https://gitlab.com/api/v4`.
    pub api_url: Url,
}

impl fmt::Debug for GitLabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabConfig")
            .field("group_id", &self.group_id)
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Bitbucket destination settings.
#[derive(Clone)]
pub struct BitbucketConfig {
    /// Basic-auth user for the API and the push URL.
    pub user: String,
    /// Basic-auth secret (password or app password).
    pub password: String,
    /// Workspace that owns the created repositories.
    pub workspace: String,
    /// Project key attached to every created repository.
    pub project_key: String,
    /// REST API root, e.g. `https://api.bitbucket.org/2.0`.
    pub api_url: Url,
    /// Git host root used to build push URLs, e.g. `https://bitbucket.org`.
    pub git_url: Url,
}

impl fmt::Debug for BitbucketConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitbucketConfig")
            .field("user", &self.user)
            .field("workspace", &self.workspace)
            .field("project_key", &self.project_key)
            .field("api_url", &self.api_url)
            .field("git_url", &self.git_url)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Execution settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Pause after each successful replication, in seconds.
    pub delay_secs: u64,
    /// Timeout applied to every HTTP request, in seconds.
    pub http_timeout_secs: u64,
    /// Append-only failure log.
    pub error_log: PathBuf,
    /// Directory under which transient mirror clones are created.
    pub work_dir: PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
            http_timeout_secs: default_http_timeout_secs(),
            error_log: PathBuf::from(default_error_log()),
            work_dir: PathBuf::from("."),
        }
    }
}

fn default_gitlab_api_url() -> &'static str {
    "https://gitlab.com/api/v4"
}

fn default_bitbucket_api_url() -> &'static str {
    "https://api.bitbucket.org/2.0"
}

fn default_bitbucket_git_url() -> &'static str {
    "https://bitbucket.org"
}

fn default_delay_secs() -> u64 {
    5
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_error_log() -> &'static str {
    "error.txt"
}

impl MirrorConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. All missing required variables are
    /// reported together so a single run shows the full list.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> =
            REQUIRED_VARS.iter().filter(|key| get(**key).is_none()).map(|key| key.to_string()).collect();
        if !missing.is_empty() {
            return Err(AppError::MissingEnvironment(missing));
        }

        let required = |key: &str| get(key).ok_or_else(|| AppError::MissingEnvironment(vec![key.into()]));

        let gitlab = GitLabConfig {
            group_id: required(ENV_GITLAB_GROUP_ID)?,
            token: required(ENV_GITLAB_TOKEN)?,
            api_url: parse_base_url(
                ENV_GITLAB_API_URL,
                get(ENV_GITLAB_API_URL).as_deref().unwrap_or(default_gitlab_api_url()),
            )?,
        };

        let bitbucket = BitbucketConfig {
            user: required(ENV_BITBUCKET_USER)?,
            password: required(ENV_BITBUCKET_PASS)?,
            workspace: required(ENV_BITBUCKET_WORKSPACE)?,
            project_key: required(ENV_BITBUCKET_PROJECT)?,
            api_url: parse_base_url(
                ENV_BITBUCKET_API_URL,
                get(ENV_BITBUCKET_API_URL).as_deref().unwrap_or(default_bitbucket_api_url()),
            )?,
            git_url: parse_base_url(
                ENV_BITBUCKET_GIT_URL,
                get(ENV_BITBUCKET_GIT_URL).as_deref().unwrap_or(default_bitbucket_git_url()),
            )?,
        };

        let mut run = RunSettings::default();
        if let Some(value) = get(ENV_DELAY_SECS) {
            run.delay_secs = parse_secs(ENV_DELAY_SECS, &value)?;
        }
        if let Some(value) = get(ENV_HTTP_TIMEOUT_SECS) {
            run.http_timeout_secs = parse_secs(ENV_HTTP_TIMEOUT_SECS, &value)?;
        }
        if let Some(value) = get(ENV_ERROR_LOG) {
            run.error_log = PathBuf::from(value);
        }

        Ok(Self { gitlab, bitbucket, run })
    }
}

fn parse_base_url(key: &str, value: &str) -> Result<Url, AppError> {
    let url = Url::parse(value.trim())
        .map_err(|e| AppError::config_error(format!("{key} is not a valid URL '{value}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::config_error(format!("{key} cannot be used as a base URL: '{value}'")));
    }
    Ok(url)
}

fn parse_secs(key: &str, value: &str) -> Result<u64, AppError> {
    value.trim().parse().map_err(|e| {
        AppError::config_error(format!("{key} must be a whole number of seconds, got '{value}': {e}"))
    })
}
