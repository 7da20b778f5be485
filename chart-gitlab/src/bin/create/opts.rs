use clap::Parser;
use std::path::{Path, PathBuf};

/// Creates a Helm chart project in GitLab from a template repository, prefixing the
/// project path with the target namespace.
#[derive(Parser)]
#[command(version)]
pub(crate) struct CliArgs {
    /// URL of the GitLab instance.
    #[arg(short, long)]
    gitlab_url: String,

    /// User name for git authentication.
    #[arg(short, long)]
    user: String,

    /// GitLab access token. Requires full API access.
    #[arg(short, long, env = "GITLAB_TOKEN")]
    token: String,

    /// URL of the source project.
    #[arg(short, long)]
    source_project: String,

    /// Checkout directory of the source project, containing `.cicd.yaml`.
    #[arg(long)]
    source_dir: PathBuf,

    /// URL of the template chart repository.
    #[arg(short = 'm', long)]
    template_repo: String,

    /// Target namespace, used as the project path prefix.
    #[arg(short, long, default_value = constants::DEFAULT_NAMESPACE)]
    namespace: String,

    /// Temporary directory for the template chart clone.
    #[arg(long)]
    charts_dir: PathBuf,

    /// File which receives the new project's clone URL as plain text.
    #[arg(short, long)]
    result_file: PathBuf,
}

impl CliArgs {
    pub(crate) fn args() -> Self {
        CliArgs::parse()
    }

    pub(crate) fn gitlab_url(&self) -> &str {
        self.gitlab_url.as_str()
    }

    pub(crate) fn user(&self) -> &str {
        self.user.as_str()
    }

    pub(crate) fn token(&self) -> &str {
        self.token.as_str()
    }

    pub(crate) fn source_project(&self) -> &str {
        self.source_project.as_str()
    }

    pub(crate) fn source_dir(&self) -> &Path {
        self.source_dir.as_path()
    }

    pub(crate) fn template_repo(&self) -> &str {
        self.template_repo.as_str()
    }

    pub(crate) fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    pub(crate) fn charts_dir(&self) -> &Path {
        self.charts_dir.as_path()
    }

    pub(crate) fn result_file(&self) -> &Path {
        self.result_file.as_path()
    }
}

pub(crate) mod validators {
    use chartops::common::error::{NotADirectory, Result, ValidateDirPath};
    use snafu::{ensure, ResultExt};
    use std::path::Path;

    /// Validate that the source directory exists and is a directory.
    pub(crate) fn validate_source_dir(path: &Path) -> Result<()> {
        let metadata = std::fs::metadata(path).context(ValidateDirPath {
            path: path.to_path_buf(),
        })?;
        ensure!(
            metadata.is_dir(),
            NotADirectory {
                path: path.to_path_buf(),
            }
        );
        Ok(())
    }
}
