//! Shorthand parser
//!
//! Input is consumed left to right:
//!
//! 1. `owner/name`, or else a bare token (repository shorthand, then user)
//! 2. the default repository, when nothing above resolved one
//! 3. `#123` / `123`
//! 4. `/path`
//! 5. whatever remains, as a query or as grounds for rejection
//!
//! Shorthand tables expand tokens into canonical names along the way. A
//! rejected input yields an empty `ParseResult`; there is no error type.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::grammar::{self, Cursor};
use crate::options::{ParserOptions, UserPolicy};
use crate::result::ParseResult;

/// Why an input was turned away
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    #[error("a repository is required but none was found")]
    RepoRequired,

    #[error("numeric user followed by more input")]
    NumericUserWithTrailingInput,

    #[error("unmatched input left over")]
    LeftoverInput,
}

/// Parses shorthand against a pair of expansion tables
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    repo_map: &'a HashMap<String, String>,
    user_map: &'a HashMap<String, String>,
    default_repo: Option<&'a str>,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser. An empty `default_repo` counts as none.
    pub fn new(
        repo_map: &'a HashMap<String, String>,
        user_map: &'a HashMap<String, String>,
        default_repo: Option<&'a str>,
        options: ParserOptions,
    ) -> Self {
        Self {
            repo_map,
            user_map,
            default_repo: default_repo.filter(|repo| !repo.is_empty()),
            options,
        }
    }

    /// Repository/user lookup plus a trailing query. See
    /// [`ParserOptions::legacy`].
    pub fn legacy(
        repo_map: &'a HashMap<String, String>,
        user_map: &'a HashMap<String, String>,
        bare_user: bool,
        skip_numeric: bool,
    ) -> Self {
        Self::new(
            repo_map,
            user_map,
            None,
            ParserOptions::legacy(bare_user, skip_numeric),
        )
    }

    /// Parse one line of input
    pub fn parse(&self, input: &str) -> ParseResult {
        match self.try_parse(input) {
            Ok(result) => {
                trace!(?result, "parsed {:?}", input);
                result
            }
            Err(reason) => {
                debug!(%reason, "no match for {:?}", input);
                ParseResult::default()
            }
        }
    }

    pub(crate) fn try_parse(&self, input: &str) -> Result<ParseResult, Rejection> {
        let mut cursor = Cursor::new(input);
        let mut result = ParseResult::default();
        let options = &self.options;

        if options.parse_repo {
            self.match_repo_or_user(&mut cursor, &mut result);
            self.apply_default_repo(&cursor, &mut result)?;
        }

        if options.require_repo && !result.has_repo() {
            return Err(Rejection::RepoRequired);
        }

        if options.parse_issue {
            if let Some(token) = grammar::issue(cursor.rest()) {
                result.issue = Some(token.value.to_string());
                cursor.advance(token.len);
            }
        }

        if options.parse_path {
            if let Some(token) = grammar::path(cursor.rest()) {
                result.path = Some(token.value.to_string());
                cursor.advance(token.len);
            }
        }

        if options.parse_query {
            let query = trim_query(cursor.rest());
            if !query.is_empty() {
                result.query = Some(query.to_string());
            }
        } else if !cursor.is_done() {
            return Err(Rejection::LeftoverInput);
        }

        Ok(result)
    }

    /// Leading `owner/name`, repository shorthand, or user
    fn match_repo_or_user(&self, cursor: &mut Cursor<'_>, result: &mut ParseResult) {
        if let Some(token) = grammar::owner_repo(cursor.rest()) {
            let expanded = self.user_map.get(token.owner);
            let owner = expanded.map_or(token.owner, String::as_str);

            if token.name.is_empty() {
                // `owner/` names a user, not a repository
                result.set_user(owner, expanded.map(|_| token.owner));
            } else {
                result.set_repo(&format!("{}/{}", owner, token.name));
                if expanded.is_some() {
                    result.set_user(owner, Some(token.owner));
                }
            }

            cursor.advance(token.len);
            return;
        }

        let Some(token) = grammar::bare_token(cursor.rest()) else {
            return;
        };

        if let Some(repo) = self.repo_map.get(token.value) {
            result.set_repo(repo);
            result.repo_shorthand = Some(token.value.to_string());
            cursor.advance(token.len);
            return;
        }

        match self.options.users {
            UserPolicy::Never => {}
            policy => {
                if let Some(user) = self.user_map.get(token.value) {
                    result.set_user(user, Some(token.value));
                    cursor.advance(token.len);
                } else if policy == UserPolicy::Any && !self.skips_numeric(cursor) {
                    result.set_user(token.value, None);
                    cursor.advance(token.len);
                }
            }
        }
    }

    fn skips_numeric(&self, cursor: &Cursor<'_>) -> bool {
        self.options.skip_numeric_user && grammar::looks_like_issue(cursor.rest())
    }

    /// Fill in the default repository when nothing resolved one
    fn apply_default_repo(
        &self,
        cursor: &Cursor<'_>,
        result: &mut ParseResult,
    ) -> Result<(), Rejection> {
        let Some(default_repo) = self.default_repo else {
            return Ok(());
        };
        if result.has_repo() {
            return Ok(());
        }

        if self.options.users != UserPolicy::Never && result.has_user() {
            // A numeric user with nothing after it is an issue in the
            // default repository
            let numeric = result.user.as_deref().is_some_and(grammar::looks_like_issue);
            if numeric {
                if !cursor.is_done() {
                    return Err(Rejection::NumericUserWithTrailingInput);
                }
                let issue = result.user.take();
                result.set_repo(default_repo);
                result.issue = issue;
            }
        } else {
            result.set_repo(default_repo);
        }

        Ok(())
    }
}

/// Parse with the legacy preset: repository or user, then a query.
///
/// `bare_user` allows any bare token to be a user. `skip_numeric` keeps an
/// input that reads as an issue number out of the user slot.
pub fn parse(
    repo_map: &HashMap<String, String>,
    user_map: &HashMap<String, String>,
    input: &str,
    bare_user: bool,
    skip_numeric: bool,
) -> ParseResult {
    Parser::legacy(repo_map, user_map, bare_user, skip_numeric).parse(input)
}

/// Drop all trailing spaces, then at most one leading space
fn trim_query(rest: &str) -> &str {
    let trimmed = rest.trim_end_matches(' ');
    trimmed.strip_prefix(' ').unwrap_or(trimmed)
}
