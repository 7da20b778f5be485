use crate::{
    common::{error::Result, scratch::ScratchDir},
    git::{auth::GitAuth, repository::Repository},
    scaffold::{config::CicdConfig, template::Replacements},
};
use std::path::Path;
use tracing::info;

/// Contains the `.cicd.yaml` configuration read from the source directory.
pub mod config;

/// Contains the placeholder substitution across the cloned template tree.
pub mod template;

/// Populate a freshly created chart project from the template repository: clone the
/// template, substitute the placeholder tokens across its YAML files, repoint `origin` at
/// the new project and push the result. The clone directory is removed on success and on
/// failure.
pub fn populate_project(
    template_repo: &str,
    charts_dir: &Path,
    source_dir: &Path,
    project_url: &str,
    auth: &GitAuth,
) -> Result<()> {
    let config = CicdConfig::load(source_dir)?;
    let replacements = Replacements::from_config(&config);

    let scratch = ScratchDir::claim(charts_dir)?;

    info!(repo = template_repo, "Cloning the template repository");
    let repo = Repository::clone(template_repo, scratch.path(), auth)?;

    template::substitute_tree(scratch.path(), &replacements)?;

    repo.repoint_origin(project_url)?;
    repo.add_updated()?;
    repo.commit(constants::init_commit_message().as_str(), auth)?;

    info!("Pushing the templated chart to the target repository");
    repo.push(auth)?;

    Ok(())
}
