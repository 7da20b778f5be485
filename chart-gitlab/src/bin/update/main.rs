mod opts;

use chartops::{
    common::{error::Result, scratch::ScratchDir},
    git::{auth::GitAuth, repository::Repository},
    helm::values::update_image_tag,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = run().await {
        error!(%error, "Failed to update the image tag");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let opts = opts::CliArgs::args();
    opts::validators::validate_repo_url(opts.repo_url())?;

    let auth = GitAuth::new(opts.user(), opts.token());

    // Reuse a clone directory left in place by an earlier pipeline step; it is removed when
    // the guard drops either way.
    let (_scratch, repo) = if opts.charts_dir().exists() {
        info!(dir = %opts.charts_dir().display(), "Directory already exists, skipping clone");
        (
            ScratchDir::claim_existing(opts.charts_dir()),
            Repository::open(opts.charts_dir()),
        )
    } else {
        let scratch = ScratchDir::claim(opts.charts_dir())?;
        let repo = Repository::clone(opts.repo_url(), scratch.path(), &auth)?;
        (scratch, repo)
    };

    let values_path = repo.workdir().join(constants::VALUES_FILE);
    if !update_image_tag(values_path.as_path(), opts.tag())? {
        info!("Image tag not present, nothing to push");
        return Ok(());
    }

    repo.add_updated()?;
    repo.commit(constants::retag_commit_message(opts.tag()).as_str(), &auth)?;
    repo.push(&auth)?;

    info!("Changes pushed successfully");
    Ok(())
}
