use clap::Parser;
use std::path::{Path, PathBuf};

/// Updates the container image tag in an existing chart's `values.yaml` and pushes the
/// change.
#[derive(Parser)]
#[command(version)]
pub(crate) struct CliArgs {
    /// URL of the chart repository.
    #[arg(short, long)]
    repo_url: String,

    /// User name for git authentication.
    #[arg(short, long)]
    user: String,

    /// GitLab access token. Requires full API access.
    #[arg(short, long, env = "GITLAB_TOKEN")]
    token: String,

    /// Temporary directory for the chart repository clone.
    #[arg(long)]
    charts_dir: PathBuf,

    /// New container image tag.
    #[arg(long)]
    tag: String,
}

impl CliArgs {
    pub(crate) fn args() -> Self {
        CliArgs::parse()
    }

    pub(crate) fn repo_url(&self) -> &str {
        self.repo_url.as_str()
    }

    pub(crate) fn user(&self) -> &str {
        self.user.as_str()
    }

    pub(crate) fn token(&self) -> &str {
        self.token.as_str()
    }

    pub(crate) fn charts_dir(&self) -> &Path {
        self.charts_dir.as_path()
    }

    pub(crate) fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

pub(crate) mod validators {
    use chartops::common::error::{RepoUrlParse, Result};
    use snafu::ResultExt;
    use url::Url;

    /// Validate that the chart repository URL parses, before any clone is attempted.
    pub(crate) fn validate_repo_url(repo_url: &str) -> Result<()> {
        Url::parse(repo_url).context(RepoUrlParse {
            repo_url: repo_url.to_string(),
        })?;
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::validate_repo_url;

        #[test]
        fn accepts_https_repo_url() {
            assert!(validate_repo_url("https://gitlab.example.com/charts/api.git").is_ok());
        }

        #[test]
        fn rejects_malformed_repo_url() {
            assert!(validate_repo_url("gitlab.example.com/charts/api.git").is_err());
        }
    }
}
