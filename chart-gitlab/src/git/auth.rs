use base64::{engine::general_purpose::STANDARD, Engine};

/// Credential provider for authenticated git operations. Credentials are handed to git as an
/// `Authorization` header through its config environment, so they never appear in a remote
/// URL, in `.git/config`, or in the process argument list.
#[derive(Debug, Clone)]
pub struct GitAuth {
    user: String,
    token: String,
}

impl GitAuth {
    pub fn new<U, T>(user: U, token: T) -> Self
    where
        U: ToString,
        T: ToString,
    {
        Self {
            user: user.to_string(),
            token: token.to_string(),
        }
    }

    /// The git author/committer user name.
    pub fn user(&self) -> &str {
        self.user.as_str()
    }

    /// The `Authorization` header value for HTTP basic auth with the access token.
    pub fn authorization_header(&self) -> String {
        let credentials = STANDARD.encode(format!("{}:{}", self.user, self.token));
        format!("Authorization: Basic {credentials}")
    }
}

#[cfg(test)]
mod tests {
    use super::GitAuth;

    #[test]
    fn basic_auth_header() {
        let auth = GitAuth::new("user", "token");
        assert_eq!(
            auth.authorization_header(),
            "Authorization: Basic dXNlcjp0b2tlbg=="
        );
    }
}
