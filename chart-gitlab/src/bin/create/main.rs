mod opts;

use chartops::{
    common::error::{Result, ResultFileWrite},
    git::auth::GitAuth,
    gitlab::{
        client::GitlabClient,
        project::{provision, TargetPath},
    },
    scaffold,
};
use snafu::ResultExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = run().await {
        error!(%error, "Failed to create the Helm chart project");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let opts = opts::CliArgs::args();
    opts::validators::validate_source_dir(opts.source_dir())?;

    let client = GitlabClient::new(opts.gitlab_url(), opts.token())?;
    let target = TargetPath::derive(opts.gitlab_url(), opts.source_project(), opts.namespace())?;
    let provisioned = provision(&client, &target).await?;

    // The pipeline step that follows reads the clone URL from the result file, for both the
    // pre-existing and the freshly created project.
    std::fs::write(
        opts.result_file(),
        provisioned.project().http_url_to_repo(),
    )
    .context(ResultFileWrite {
        path: opts.result_file().to_path_buf(),
    })?;

    if !provisioned.is_fresh() {
        info!("The project already exists. No further action will be taken");
        return Ok(());
    }

    let auth = GitAuth::new(opts.user(), opts.token());
    scaffold::populate_project(
        opts.template_repo(),
        opts.charts_dir(),
        opts.source_dir(),
        provisioned.project().http_url_to_repo(),
        &auth,
    )?;

    info!("Process complete. Project created with template manifests");
    Ok(())
}
