/// Contains the error handling tooling and the scratch directory guard.
pub mod common;

/// Contains the GitLab REST API client, group resolution and project provisioning.
pub mod gitlab;

/// Contains authenticated `git` command execution.
pub mod git;

/// Contains tools to rewrite the image tag in a chart's values file.
pub mod helm;

/// Contains the template population logic for freshly created chart projects.
pub mod scaffold;
