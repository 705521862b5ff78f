use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves bearer tokens to users from a static table.
pub struct Authenticator {
    tokens: HashMap<String, UserId>,
    sign_in_path: String,
}

impl Authenticator {
    pub fn new(config: &AuthConfig) -> Self {
        let tokens = config.tokens
            .iter()
            .map(|(token, user)| (token.clone(), UserId::new(user.clone())))
            .collect();

        Self {
            tokens,
            sign_in_path: config.sign_in_path.clone(),
        }
    }

    /// `None` means the caller is not signed in.
    pub fn authenticate(&self, authorization: Option<&str>) -> Option<UserId> {
        let (scheme, token) = authorization?.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        self.tokens.get(token).cloned()
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }
}
