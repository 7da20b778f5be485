use reqwest::StatusCode;
use snafu::Snafu;
use std::path::PathBuf;

/// For use with multiple fallible operations which may fail for different reasons, but are
/// defined withing the same scope and must return to the outer scope (calling scope) using
/// the try operator -- '?'.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[snafu(context(suffix(false)))]
pub enum Error {
    /// Error for when the GitLab instance URL is parsed.
    #[snafu(display("Failed to parse GitLab URL {}: {}", gitlab_url, source))]
    GitlabUrlParse {
        source: url::ParseError,
        gitlab_url: String,
    },

    /// Error for when the chart repository URL is parsed.
    #[snafu(display("Failed to parse repository URL {}: {}", repo_url, source))]
    RepoUrlParse {
        source: url::ParseError,
        repo_url: String,
    },

    /// Error for when the REST API client cannot be built.
    #[snafu(display("Failed to build GitLab REST API client: {}", source))]
    RestClientBuild { source: reqwest::Error },

    /// Error for when the access token is not a valid header value.
    #[snafu(display("Failed to use access token as a request header: {}", source))]
    TokenHeaderValue {
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Error for when a REST API endpoint path cannot be joined to the base URL.
    #[snafu(display("Failed to build REST API URL for path {}: {}", path, source))]
    RestUrlJoin {
        source: url::ParseError,
        path: String,
    },

    /// Error for when a group list request fails.
    #[snafu(display("Failed to list groups matching {}: {}", group_name, source))]
    GroupListRequest {
        source: reqwest::Error,
        group_name: String,
    },

    /// Error for when a group list request returns a non-success status.
    #[snafu(display(
        "Group list for {} returned status {}: {}",
        group_name,
        status,
        body
    ))]
    GroupListResponse {
        group_name: String,
        status: StatusCode,
        body: String,
    },

    /// Error for when a group creation request fails.
    #[snafu(display("Failed to create group {}: {}", group_name, source))]
    GroupCreateRequest {
        source: reqwest::Error,
        group_name: String,
    },

    /// Error for when a group creation request returns a non-success status.
    #[snafu(display(
        "Group creation for {} returned status {}: {}",
        group_name,
        status,
        body
    ))]
    GroupCreateResponse {
        group_name: String,
        status: StatusCode,
        body: String,
    },

    /// Error for when a project lookup request fails.
    #[snafu(display("Failed to look up project {}: {}", project_path, source))]
    ProjectGetRequest {
        source: reqwest::Error,
        project_path: String,
    },

    /// Error for when a project lookup returns a non-success, non-404 status.
    #[snafu(display(
        "Project lookup for {} returned status {}: {}",
        project_path,
        status,
        body
    ))]
    ProjectGetResponse {
        project_path: String,
        status: StatusCode,
        body: String,
    },

    /// Error for when a project creation request fails.
    #[snafu(display("Failed to create project {}: {}", project_name, source))]
    ProjectCreateRequest {
        source: reqwest::Error,
        project_name: String,
    },

    /// Error for when a project creation request returns a non-success status.
    #[snafu(display(
        "Project creation for {} returned status {}: {}",
        project_name,
        status,
        body
    ))]
    ProjectCreateResponse {
        project_name: String,
        status: StatusCode,
        body: String,
    },

    /// Error for when the source project URL is not hosted on the GitLab instance.
    #[snafu(display(
        "Source project URL {} is not under the GitLab instance {}",
        source_project,
        gitlab_url
    ))]
    SourceProjectOutsideGitlab {
        source_project: String,
        gitlab_url: String,
    },

    /// Error for when the source project URL carries no path segments.
    #[snafu(display("Source project URL {} has an empty project path", source_project))]
    EmptyProjectPath { source_project: String },

    /// Error for when a git command fails to spawn.
    #[snafu(display(
        "Failed to run git command,\ncommand: {},\nargs: {:?},\ncommand_error: {}",
        command,
        args,
        source
    ))]
    GitCommand {
        source: std::io::Error,
        command: String,
        args: Vec<String>,
    },

    /// Error for when a git command execution succeeds, but with an error.
    #[snafu(display(
        "git command returned an error,\ncommand: {},\nargs: {:?},\nstd_err: {}",
        command,
        args,
        std_err
    ))]
    GitCommandOutput {
        command: String,
        args: Vec<String>,
        std_err: String,
    },

    /// Error when opening a file.
    #[snafu(display("Failed to open file {}: {}", filepath.display(), source))]
    OpeningFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    /// Error when reading a file into memory.
    #[snafu(display("Failed to read file {}: {}", filepath.display(), source))]
    ReadingFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    /// Error when writing a file back to disk.
    #[snafu(display("Failed to write file {}: {}", filepath.display(), source))]
    WritingFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    /// Error for when the CI configuration file is absent from the source directory.
    #[snafu(display("CI configuration file {} not found", filepath.display()))]
    MissingConfigFile { filepath: PathBuf },

    /// Error for when yaml could not be parsed from a file (Reader).
    #[snafu(display("Failed to parse YAML at {}: {}", filepath.display(), source))]
    YamlParseFromFile {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },

    /// Error for when yaml could not be serialized back to a file.
    #[snafu(display("Failed to serialize YAML for {}: {}", filepath.display(), source))]
    YamlSerialize {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },

    /// Error for when a directory cannot be removed.
    #[snafu(display("Failed to remove directory {}: {}", path.display(), source))]
    RemoveDirectory {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Error for when walking the cloned template tree fails.
    #[snafu(display("Failed to walk template directory {}: {}", path.display(), source))]
    TemplateWalk {
        source: walkdir::Error,
        path: PathBuf,
    },

    /// Error for when the clone URL result file cannot be written.
    #[snafu(display("Failed to write result file {}: {}", path.display(), source))]
    ResultFileWrite {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Error for when the path to a directory cannot be validated.
    #[snafu(display("Failed to validate directory path {}: {}", path.display(), source))]
    ValidateDirPath {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Error for when the path is not that of a directory.
    #[snafu(display("{} is not a directory", path.display()))]
    NotADirectory { path: PathBuf },
}

/// A wrapper type to remove repeated Result<T, Error> returns.
pub type Result<T, E = Error> = std::result::Result<T, E>;
