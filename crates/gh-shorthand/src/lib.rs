//! gh-shorthand - Expand typed GitHub shorthand
//!
//! Type `df 12` and get `zerowidth/dotfiles#12`. A `Parser` walks the
//! input left to right, recognizing `owner/name`, repository and user
//! shorthand, issue numbers, paths and trailing query text. Two tables
//! from the config file turn short tokens into canonical names.
//!
//! Parsing never fails: input with no usable reading gives an empty
//! `ParseResult`.

pub mod alfred;
pub mod config;
pub mod grammar;
pub mod items;
pub mod options;
pub mod parser;
pub mod result;

pub use alfred::{Item, Items};
pub use config::{Config, ConfigError};
pub use items::generate_items;
pub use options::{ParserOptions, UserPolicy};
pub use parser::{parse, Parser};
pub use result::ParseResult;
