//! Token grammar for shorthand input
//!
//! Every recognizer looks at the unconsumed remainder of the input and
//! either declines or reports how many bytes it matched plus the value it
//! extracted. Character classes are ASCII only: `\w` is `[0-9A-Za-z_]`,
//! `\d` is `[0-9]` and `\s` is `[\t\n\f\r ]`.
//!
//! - owner/repo: `^([A-Za-z0-9][-A-Za-z0-9]*)/([\w.\-]*)(boundary)`
//! - bare token: `^([A-Za-z0-9][-A-Za-z0-9]*)\b`
//! - issue:      `^ ?#?([1-9]\d*)$`
//! - path:       `^ ?(/\S*)$`

use regex::Regex;
use std::sync::LazyLock;

/// `owner/name`. The name runs to the end of input, or otherwise stops on
/// its last word character, so `foo/bar. baz` yields `foo/bar`.
static OWNER_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9]*)/([0-9A-Za-z_.\-]*$|[0-9A-Za-z_.\-]*[0-9A-Za-z_])")
        .expect("owner/repo pattern is valid")
});

/// Candidate run for a bare token; the word boundary is checked separately.
static BARE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][-A-Za-z0-9]*").expect("bare token pattern is valid")
});

static ISSUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ ?#?([1-9][0-9]*)$").expect("issue pattern is valid"));

static PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ ?(/[^\t\n\f\r ]*)$").expect("path pattern is valid"));

/// Unconsumed input plus an offset into it
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Everything not yet consumed
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Consume `len` bytes of the remainder
    pub fn advance(&mut self, len: usize) {
        self.offset = (self.offset + len).min(self.input.len());
    }

    pub fn is_done(&self) -> bool {
        self.offset >= self.input.len()
    }
}

/// A recognized token: bytes consumed and the captured value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub len: usize,
    pub value: &'a str,
}

/// A recognized `owner/name` token. `name` may be empty for `owner/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerRepo<'a> {
    pub len: usize,
    pub owner: &'a str,
    pub name: &'a str,
}

pub fn owner_repo(rest: &str) -> Option<OwnerRepo<'_>> {
    let caps = OWNER_REPO.captures(rest)?;
    let whole = caps.get(0)?;
    Some(OwnerRepo {
        len: whole.end(),
        owner: caps.get(1)?.as_str(),
        name: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// The longest identifier prefix that ends on an ASCII word boundary
pub fn bare_token(rest: &str) -> Option<Token<'_>> {
    let run = BARE_RUN.find(rest)?;
    let bytes = rest.as_bytes();
    (1..=run.end())
        .rev()
        .find(|&end| is_word_boundary(bytes, end))
        .map(|end| Token {
            len: end,
            value: &rest[..end],
        })
}

pub fn issue(rest: &str) -> Option<Token<'_>> {
    capture(&ISSUE, rest)
}

pub fn path(rest: &str) -> Option<Token<'_>> {
    capture(&PATH, rest)
}

/// Whether the text as a whole reads as an issue number
pub fn looks_like_issue(text: &str) -> bool {
    ISSUE.is_match(text)
}

fn capture<'a>(re: &Regex, rest: &'a str) -> Option<Token<'a>> {
    let caps = re.captures(rest)?;
    Some(Token {
        len: caps.get(0)?.end(),
        value: caps.get(1)?.as_str(),
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_word_boundary(bytes: &[u8], pos: usize) -> bool {
    let before = pos > 0 && bytes.get(pos - 1).copied().is_some_and(is_word_byte);
    let after = bytes.get(pos).copied().is_some_and(is_word_byte);
    before != after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("foo/bar 12");
        assert_eq!(cursor.rest(), "foo/bar 12");
        cursor.advance(7);
        assert_eq!(cursor.rest(), " 12");
        assert!(!cursor.is_done());
        cursor.advance(10);
        assert!(cursor.is_done());
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_owner_repo() {
        let token = owner_repo("zerowidth/gh-shorthand").unwrap();
        assert_eq!(token.owner, "zerowidth");
        assert_eq!(token.name, "gh-shorthand");
        assert_eq!(token.len, "zerowidth/gh-shorthand".len());

        let token = owner_repo("foo/bar 12").unwrap();
        assert_eq!((token.owner, token.name, token.len), ("foo", "bar", 7));
    }

    #[test]
    fn test_owner_repo_trailing_punctuation() {
        // Stops on the last word character unless the name reaches the end
        let token = owner_repo("foo/bar. baz").unwrap();
        assert_eq!(token.name, "bar");

        let token = owner_repo("foo/bar.").unwrap();
        assert_eq!(token.name, "bar.");

        let token = owner_repo("foo/bar#12").unwrap();
        assert_eq!(token.name, "bar");
        assert_eq!(token.len, 7);
    }

    #[test]
    fn test_owner_repo_empty_name() {
        let token = owner_repo("foo/").unwrap();
        assert_eq!(token.owner, "foo");
        assert_eq!(token.name, "");

        assert!(owner_repo("foo/ bar").is_none());
        assert!(owner_repo("foo/.. bar").is_none());
    }

    #[test]
    fn test_owner_repo_rejects_bad_owner() {
        assert!(owner_repo("-foo/bar").is_none());
        assert!(owner_repo("foo_bar/baz").is_none());
        assert!(owner_repo("foo").is_none());
    }

    #[test]
    fn test_bare_token() {
        assert_eq!(bare_token("foo").unwrap().value, "foo");
        assert_eq!(bare_token("foo bar").unwrap().value, "foo");
        assert_eq!(bare_token("foo-bar baz").unwrap().value, "foo-bar");
        assert_eq!(bare_token("foo/bar").unwrap().value, "foo");
        assert_eq!(bare_token("123").unwrap().value, "123");
    }

    #[test]
    fn test_bare_token_backs_off_to_boundary() {
        // A trailing hyphen is not followed by a word character
        assert_eq!(bare_token("foo-").unwrap().value, "foo");
        assert_eq!(bare_token("foo- bar").unwrap().value, "foo");
        // '-' then '_' is a boundary, alphanumeric then '_' is not
        assert_eq!(bare_token("foo-_x").unwrap().value, "foo-");
        assert!(bare_token("foo_bar").is_none());
    }

    #[test]
    fn test_bare_token_rejects() {
        assert!(bare_token("").is_none());
        assert!(bare_token(" foo").is_none());
        assert!(bare_token("-foo").is_none());
        assert!(bare_token("#12").is_none());
    }

    #[test]
    fn test_bare_token_non_ascii_is_not_a_word_character() {
        assert_eq!(bare_token("caf\u{e9}").unwrap().value, "caf");
    }

    #[test]
    fn test_issue() {
        assert_eq!(issue("12"), Some(Token { len: 2, value: "12" }));
        assert_eq!(issue(" #12"), Some(Token { len: 4, value: "12" }));
        assert_eq!(issue("#1").unwrap().value, "1");
        assert!(issue("012").is_none());
        assert!(issue("  12").is_none());
        assert!(issue("12 ").is_none());
        assert!(issue("#").is_none());
        assert!(issue("12a").is_none());
    }

    #[test]
    fn test_path() {
        assert_eq!(path(" /issues/5").unwrap().value, "/issues/5");
        assert_eq!(path("/").unwrap().value, "/");
        assert_eq!(path("/pulls").unwrap().len, 6);
        assert!(path("/foo bar").is_none());
        assert!(path("foo").is_none());
        assert!(path("  /foo").is_none());
    }

    #[test]
    fn test_looks_like_issue() {
        assert!(looks_like_issue("123"));
        assert!(looks_like_issue("#5"));
        assert!(!looks_like_issue("0"));
        assert!(!looks_like_issue("123 foo"));
        assert!(!looks_like_issue("foo"));
    }
}
