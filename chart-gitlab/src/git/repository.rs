use crate::{
    common::error::{Error, GitCommand, GitCommandOutput, Result},
    git::auth::GitAuth,
};
use snafu::ResultExt;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use tracing::info;

/// The git binary in $PATH.
const GIT: &str = "git";

/// A local clone of a chart repository, driven through the `git` binary.
#[derive(Debug)]
pub struct Repository {
    workdir: PathBuf,
}

/// Run a git command, injecting credentials through git's config environment when given.
fn run_git(args: Vec<String>, workdir: Option<&Path>, auth: Option<&GitAuth>) -> Result<()> {
    let mut command = Command::new(GIT);
    command.args(args.iter());
    if let Some(dir) = workdir {
        command.current_dir(dir);
    }
    if let Some(auth) = auth {
        command
            .env("GIT_CONFIG_COUNT", "1")
            .env("GIT_CONFIG_KEY_0", "http.extraheader")
            .env("GIT_CONFIG_VALUE_0", auth.authorization_header())
            // Keep git from falling back to an interactive credential prompt.
            .env("GIT_TERMINAL_PROMPT", "0");
    }

    let output = command.output().context(GitCommand {
        command: GIT.to_string(),
        args: args.clone(),
    })?;
    if !output.status.success() {
        return GitCommandOutput {
            command: GIT.to_string(),
            args,
            std_err: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
        }
        .fail();
    }
    Ok(())
}

impl Repository {
    /// Clone a repository into `target_dir` with authenticated transport.
    pub fn clone(repo_url: &str, target_dir: &Path, auth: &GitAuth) -> Result<Self> {
        info!(repo = repo_url, dir = %target_dir.display(), "Cloning repository");
        run_git(
            vec![
                "clone".to_string(),
                repo_url.to_string(),
                target_dir.to_string_lossy().to_string(),
            ],
            None,
            Some(auth),
        )?;
        Ok(Self {
            workdir: target_dir.to_path_buf(),
        })
    }

    /// Open an already-cloned repository.
    pub fn open(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.as_path()
    }

    /// Point the `origin` remote at a new URL. When the clone has no `origin` remote at all,
    /// recover by creating it instead of erroring out.
    pub fn repoint_origin(&self, remote_url: &str) -> Result<()> {
        let set_url = run_git(
            vec![
                "remote".to_string(),
                "set-url".to_string(),
                "origin".to_string(),
                remote_url.to_string(),
            ],
            Some(self.workdir()),
            None,
        );
        match set_url {
            Ok(()) => {
                info!("Updated remote 'origin' to the target repository");
                Ok(())
            }
            Err(Error::GitCommandOutput { .. }) => {
                run_git(
                    vec![
                        "remote".to_string(),
                        "add".to_string(),
                        "origin".to_string(),
                        remote_url.to_string(),
                    ],
                    Some(self.workdir()),
                    None,
                )?;
                info!("Created remote 'origin' with the target repository URL");
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Stage all modified tracked files.
    pub fn add_updated(&self) -> Result<()> {
        run_git(
            vec!["add".to_string(), "--update".to_string()],
            Some(self.workdir()),
            None,
        )
    }

    /// Commit staged changes with the CI committer identity.
    pub fn commit(&self, message: &str, auth: &GitAuth) -> Result<()> {
        run_git(
            vec![
                "-c".to_string(),
                format!("user.name={}", auth.user()),
                "-c".to_string(),
                format!("user.email={}", constants::git_committer_email(auth.user())),
                "commit".to_string(),
                "-m".to_string(),
                message.to_string(),
            ],
            Some(self.workdir()),
            None,
        )
    }

    /// Push the current branch to `origin` with authenticated transport.
    pub fn push(&self, auth: &GitAuth) -> Result<()> {
        run_git(
            vec![
                "push".to_string(),
                "origin".to_string(),
                "HEAD".to_string(),
            ],
            Some(self.workdir()),
            Some(auth),
        )
    }
}
