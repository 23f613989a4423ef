//! Parse results
//!
//! A `ParseResult` with every field unset means the input had no usable
//! interpretation. Any populated field means the match succeeded.

use serde::Serialize;

/// Outcome of parsing one line of shorthand input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Canonical repository, `owner/name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Token expanded through the repository table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_shorthand: Option<String>,

    /// Canonical user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Token expanded through the user table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_shorthand: Option<String>,

    /// Issue or project number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    /// Path suffix, always starting with `/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Trailing free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl ParseResult {
    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_repo(&self) -> bool {
        self.repository.is_some()
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    /// Owner half of the repository
    pub fn owner(&self) -> Option<&str> {
        self.repository
            .as_deref()
            .and_then(|repo| repo.split_once('/'))
            .map(|(owner, _)| owner)
    }

    /// Name half of the repository
    pub fn name(&self) -> Option<&str> {
        self.repository
            .as_deref()
            .and_then(|repo| repo.split_once('/'))
            .map(|(_, name)| name)
    }

    /// Assign a repository. Replaces any user, since the repository owner
    /// now takes that role.
    pub(crate) fn set_repo(&mut self, repo: &str) {
        self.repository = Some(repo.to_string());
        self.user = None;
        self.user_shorthand = None;
    }

    pub(crate) fn set_user(&mut self, user: &str, shorthand: Option<&str>) {
        self.user = Some(user.to_string());
        self.user_shorthand = shorthand.map(str::to_string);
    }
}
