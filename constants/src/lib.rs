/// This is the placeholder token replaced with the project name from `.cicd.yaml`.
pub const PROJECT_NAME_TOKEN: &str = "<<PROJECT_NAME>>";

/// This is the placeholder token replaced with the application name from `.cicd.yaml`.
pub const APP_NAME_TOKEN: &str = "<<APP_NAME>>";

/// Name of the per-repository CI configuration file read from the source directory.
pub const CICD_CONFIG_FILE: &str = ".cicd.yaml";

/// Name of the Helm chart values file carrying the container image tag.
pub const VALUES_FILE: &str = "values.yaml";

/// File extension of the chart manifests which undergo placeholder substitution.
pub const CHART_FILE_EXTENSION: &str = "yaml";

/// Path prefix of the GitLab REST API.
pub const GITLAB_API_PREFIX: &str = "api/v4";

/// Header carrying the GitLab access token on REST API requests.
pub const GITLAB_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Request timeout for GitLab REST API calls, in seconds.
pub const REST_CLIENT_TIMEOUT_SECS: u64 = 60;

/// Page size used when listing GitLab groups.
pub const GROUPS_PAGE_SIZE: u32 = 100;

/// Defines the default target namespace prefix for new chart projects.
pub const DEFAULT_NAMESPACE: &str = "charts";

/// Commit message for the initial commit of a freshly templated chart project.
pub fn init_commit_message() -> String {
    "Initialize project with template manifests".to_string()
}

/// Commit message for an image tag update.
pub fn retag_commit_message(tag: &str) -> String {
    format!("Update image tag to {tag}")
}

/// Committer email used for CI-authored commits.
pub fn git_committer_email(user: &str) -> String {
    format!("{user}@ci.invalid")
}
