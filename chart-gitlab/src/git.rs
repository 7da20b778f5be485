/// Contains the git credential provider (token header injection).
pub mod auth;

/// Contains the git repository operations (clone, remote repoint, commit, push).
pub mod repository;
