pub mod bitbucket_http;
pub mod error_log_file;
pub mod fixed_delay;
pub mod git_command;
pub mod gitlab_http;

pub use bitbucket_http::HttpBitbucketDestination;
pub use error_log_file::FileErrorLog;
pub use fixed_delay::FixedDelay;
pub use git_command::GitCommandAdapter;
pub use gitlab_http::HttpGitLabSource;
