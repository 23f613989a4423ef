//! Parser capabilities
//!
//! Options are fixed when a `Parser` is built. Start from
//! `ParserOptions::default()` (nothing enabled) and chain what you need:
//!
//! ```
//! use gh_shorthand::ParserOptions;
//!
//! let options = ParserOptions::default().with_repo().with_issue().with_query();
//! assert!(options.parse_issue);
//! ```

/// Which bare tokens may be taken as a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserPolicy {
    /// Bare tokens are never users
    #[default]
    Never,
    /// Only keys of the user table, expanded
    ShorthandOnly,
    /// Any bare token; user table keys are expanded
    Any,
}

/// Token kinds a parser attempts to recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Look for `owner/name` or repository shorthand
    pub parse_repo: bool,

    /// Reject input that resolves no repository
    pub require_repo: bool,

    /// Bare user policy
    pub users: UserPolicy,

    /// Look for `#123` or `123`
    pub parse_issue: bool,

    /// Look for `/path`
    pub parse_path: bool,

    /// Keep leftover text as a query instead of rejecting
    pub parse_query: bool,

    /// Don't take a literal bare user when the remaining input reads as an
    /// issue number
    pub skip_numeric_user: bool,
}

impl ParserOptions {
    /// Look for a repository
    pub fn with_repo(mut self) -> Self {
        self.parse_repo = true;
        self
    }

    /// Require a repository; implies `with_repo`
    pub fn require_repo(mut self) -> Self {
        self.parse_repo = true;
        self.require_repo = true;
        self
    }

    /// Accept any bare token as a user. A repository match still wins.
    pub fn with_user(self) -> Self {
        self.with_users(UserPolicy::Any)
    }

    pub fn with_users(mut self, policy: UserPolicy) -> Self {
        self.users = policy;
        self
    }

    /// Look for issue (or project) numbers
    pub fn with_issue(mut self) -> Self {
        self.parse_issue = true;
        self
    }

    pub fn with_path(mut self) -> Self {
        self.parse_path = true;
        self
    }

    /// Match any remaining text as a query
    pub fn with_query(mut self) -> Self {
        self.parse_query = true;
        self
    }

    pub fn skip_numeric_user(mut self) -> Self {
        self.skip_numeric_user = true;
        self
    }

    /// Repository or user plus a trailing query, never rejecting leftovers.
    ///
    /// `bare_user` allows any bare token as a user; without it only user
    /// table keys are. `skip_numeric` leaves an issue-looking input for the
    /// query.
    pub fn legacy(bare_user: bool, skip_numeric: bool) -> Self {
        let policy = if bare_user {
            UserPolicy::Any
        } else {
            UserPolicy::ShorthandOnly
        };
        let options = Self::default()
            .with_repo()
            .with_users(policy)
            .with_query();
        if skip_numeric {
            options.skip_numeric_user()
        } else {
            options
        }
    }
}
