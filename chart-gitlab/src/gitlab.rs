/// Contains the GitlabClient. Used for interacting with the GitLab REST API.
pub mod client;

/// Contains group hierarchy resolution (create-if-absent path walking).
pub mod group;

/// Contains project lookup and creation under a resolved group.
pub mod project;
