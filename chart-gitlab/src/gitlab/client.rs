use crate::{
    common::error::{
        GitlabUrlParse, GroupCreateRequest, GroupCreateResponse, GroupListRequest,
        GroupListResponse, ProjectCreateRequest, ProjectCreateResponse, ProjectGetRequest,
        ProjectGetResponse, RestClientBuild, RestUrlJoin, Result, TokenHeaderValue,
    },
    gitlab::{group::Group, project::Project},
};
use constants::{GITLAB_API_PREFIX, GITLAB_TOKEN_HEADER, GROUPS_PAGE_SIZE, REST_CLIENT_TIMEOUT_SECS};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::Serialize;
use snafu::ResultExt;
use std::time::Duration;
use url::Url;

/// Request body for group creation.
#[derive(Serialize)]
struct NewGroup<'a> {
    name: &'a str,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,
}

/// Request body for project creation.
#[derive(Serialize)]
struct NewProject<'a> {
    name: &'a str,
    path: &'a str,
    namespace_id: u64,
}

/// GitlabClient contains the reqwest client and the REST API base url. The access token is
/// installed as a default request header, so it never appears in any URL.
#[derive(Clone, Debug)]
pub struct GitlabClient {
    client: Client,
    base_url: Url,
}

impl GitlabClient {
    /// Creates a new reqwest client with the token header and parses the base url.
    pub fn new(gitlab_url: &str, token: &str) -> Result<Self> {
        let mut token_value = HeaderValue::from_str(token).context(TokenHeaderValue)?;
        token_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(GITLAB_TOKEN_HEADER, token_value);

        let client = Client::builder()
            .timeout(Duration::from_secs(REST_CLIENT_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .context(RestClientBuild)?;
        let base_url = Url::parse(gitlab_url).context(GitlabUrlParse {
            gitlab_url: gitlab_url.to_string(),
        })?;
        Ok(Self { client, base_url })
    }

    /// The GitLab instance base url.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).context(RestUrlJoin {
            path: path.to_string(),
        })
    }

    /// List all groups matching a search term, following pagination to the last page.
    pub async fn list_groups(&self, search: &str) -> Result<Vec<Group>> {
        let url = self.endpoint(&format!("{GITLAB_API_PREFIX}/groups"))?;
        let mut groups: Vec<Group> = Vec::new();
        let mut page: u32 = 1;
        loop {
            let response = self
                .client
                .get(url.clone())
                .query(&[("search", search)])
                .query(&[("per_page", GROUPS_PAGE_SIZE), ("page", page)])
                .send()
                .await
                .context(GroupListRequest {
                    group_name: search.to_string(),
                })?;
            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return GroupListResponse {
                    group_name: search.to_string(),
                    status,
                    body,
                }
                .fail();
            }
            let page_groups =
                response
                    .json::<Vec<Group>>()
                    .await
                    .context(GroupListRequest {
                        group_name: search.to_string(),
                    })?;
            let last_page = (page_groups.len() as u32) < GROUPS_PAGE_SIZE;
            groups.extend(page_groups);
            if last_page {
                break;
            }
            page += 1;
        }
        Ok(groups)
    }

    /// Create a group, optionally nested under a parent group.
    pub async fn create_group(&self, name: &str, parent_id: Option<u64>) -> Result<Group> {
        let url = self.endpoint(&format!("{GITLAB_API_PREFIX}/groups"))?;
        let response = self
            .client
            .post(url)
            .json(&NewGroup {
                name,
                path: name,
                parent_id,
            })
            .send()
            .await
            .context(GroupCreateRequest {
                group_name: name.to_string(),
            })?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return GroupCreateResponse {
                group_name: name.to_string(),
                status,
                body,
            }
            .fail();
        }
        response.json::<Group>().await.context(GroupCreateRequest {
            group_name: name.to_string(),
        })
    }

    /// Look up a project by its full path. A 404 maps to `Ok(None)`, any other non-success
    /// status is an error.
    pub async fn find_project(&self, full_path: &str) -> Result<Option<Project>> {
        // GitLab addresses projects by their URL-encoded full path.
        let encoded = full_path.replace('/', "%2F");
        let url = self.endpoint(&format!("{GITLAB_API_PREFIX}/projects/{encoded}"))?;
        let response = self.client.get(url).send().await.context(ProjectGetRequest {
            project_path: full_path.to_string(),
        })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return ProjectGetResponse {
                project_path: full_path.to_string(),
                status,
                body,
            }
            .fail();
        }
        let project = response
            .json::<Project>()
            .await
            .context(ProjectGetRequest {
                project_path: full_path.to_string(),
            })?;
        Ok(Some(project))
    }

    /// Create a project under the given namespace (group) id.
    pub async fn create_project(&self, name: &str, namespace_id: u64) -> Result<Project> {
        let url = self.endpoint(&format!("{GITLAB_API_PREFIX}/projects"))?;
        let response = self
            .client
            .post(url)
            .json(&NewProject {
                name,
                path: name,
                namespace_id,
            })
            .send()
            .await
            .context(ProjectCreateRequest {
                project_name: name.to_string(),
            })?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return ProjectCreateResponse {
                project_name: name.to_string(),
                status,
                body,
            }
            .fail();
        }
        response
            .json::<Project>()
            .await
            .context(ProjectCreateRequest {
                project_name: name.to_string(),
            })
    }
}
