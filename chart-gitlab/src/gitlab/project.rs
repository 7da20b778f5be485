use crate::{
    common::error::{EmptyProjectPath, Result, SourceProjectOutsideGitlab},
    gitlab::{client::GitlabClient, group::ensure_group_path},
};
use serde::Deserialize;
use tracing::info;

/// Project as returned by the GitLab REST API.
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    id: u64,
    http_url_to_repo: String,
}

impl Project {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The project's https clone URL.
    pub fn http_url_to_repo(&self) -> &str {
        self.http_url_to_repo.as_str()
    }
}

/// The target location of a chart project, derived from the source project's URL by
/// prefixing the configured namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPath {
    groups: Vec<String>,
    project_name: String,
}

impl TargetPath {
    /// Derive the target group chain and project name. The namespace is the first group
    /// segment, followed by the source project's own group path; the project name is the
    /// URL's leaf with any `.git` suffix dropped.
    pub fn derive(gitlab_url: &str, source_project: &str, namespace: &str) -> Result<Self> {
        let base = gitlab_url.trim_end_matches('/');
        let relative = source_project
            .strip_prefix(&format!("{base}/"))
            .ok_or_else(|| {
                SourceProjectOutsideGitlab {
                    source_project: source_project.to_string(),
                    gitlab_url: gitlab_url.to_string(),
                }
                .build()
            })?;

        let mut parts: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let leaf = parts.pop().ok_or_else(|| {
            EmptyProjectPath {
                source_project: source_project.to_string(),
            }
            .build()
        })?;
        let project_name = leaf.strip_suffix(".git").unwrap_or(leaf).to_string();

        let mut groups = Vec::with_capacity(parts.len() + 1);
        groups.push(namespace.to_string());
        groups.extend(parts.into_iter().map(str::to_string));

        Ok(Self {
            groups,
            project_name,
        })
    }

    /// Ordered group chain, namespace first.
    pub fn groups(&self) -> &[String] {
        self.groups.as_slice()
    }

    pub fn project_name(&self) -> &str {
        self.project_name.as_str()
    }

    /// The project's full path, `namespace/.../name`.
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.groups.join("/"), self.project_name)
    }
}

/// Outcome of provisioning, distinguishing a freshly created project (which gets populated
/// from the template) from a pre-existing one (left untouched).
#[derive(Debug, Clone)]
pub enum Provisioned {
    Fresh(Project),
    Existing(Project),
}

impl Provisioned {
    pub fn project(&self) -> &Project {
        match self {
            Provisioned::Fresh(project) => project,
            Provisioned::Existing(project) => project,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Provisioned::Fresh(_))
    }
}

/// Look up the project at the target path, creating its group hierarchy and the project
/// itself when absent. A pre-existing project is reported as-is, without verifying its
/// contents.
pub async fn provision(client: &GitlabClient, target: &TargetPath) -> Result<Provisioned> {
    let full_path = target.full_path();
    if let Some(project) = client.find_project(&full_path).await? {
        info!(project = %full_path, "Project already exists");
        return Ok(Provisioned::Existing(project));
    }

    let namespace_id = match ensure_group_path(client, target.groups()).await? {
        Some(id) => id,
        None => {
            return EmptyProjectPath {
                source_project: full_path,
            }
            .fail()
        }
    };

    let project = client
        .create_project(target.project_name(), namespace_id)
        .await?;
    info!(project = %full_path, "Project created");
    Ok(Provisioned::Fresh(project))
}

#[cfg(test)]
mod tests {
    use super::{Project, Provisioned, TargetPath};

    fn project(id: u64, clone_url: &str) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "http_url_to_repo": clone_url,
        }))
        .unwrap()
    }

    #[test]
    fn existing_project_does_not_get_templated() {
        let clone_url = "https://gitlab.example.com/charts/team/api.git";
        let existing = Provisioned::Existing(project(42, clone_url));
        assert!(!existing.is_fresh());
        // The clone URL is still reported, for the result file.
        assert_eq!(existing.project().http_url_to_repo(), clone_url);
    }

    #[test]
    fn fresh_project_gets_templated() {
        let fresh = Provisioned::Fresh(project(43, "https://gitlab.example.com/charts/api.git"));
        assert!(fresh.is_fresh());
    }

    #[test]
    fn derives_groups_and_name() {
        let target = TargetPath::derive(
            "https://gitlab.example.com",
            "https://gitlab.example.com/team/payments/api.git",
            "charts",
        )
        .unwrap();
        assert_eq!(target.groups(), ["charts", "team", "payments"]);
        assert_eq!(target.project_name(), "api");
        assert_eq!(target.full_path(), "charts/team/payments/api");
    }

    #[test]
    fn leaf_without_git_suffix() {
        let target = TargetPath::derive(
            "https://gitlab.example.com",
            "https://gitlab.example.com/team/api",
            "charts",
        )
        .unwrap();
        assert_eq!(target.groups(), ["charts", "team"]);
        assert_eq!(target.project_name(), "api");
    }

    #[test]
    fn trailing_slash_on_instance_url() {
        let target = TargetPath::derive(
            "https://gitlab.example.com/",
            "https://gitlab.example.com/team/api.git",
            "charts",
        )
        .unwrap();
        assert_eq!(target.full_path(), "charts/team/api");
    }

    #[test]
    fn rejects_foreign_source_url() {
        let result = TargetPath::derive(
            "https://gitlab.example.com",
            "https://github.com/team/api.git",
            "charts",
        );
        assert!(result.is_err());
    }
}
