//! Shorthand Core - Shared functionality for gh-shorthand tools
//!
//! Path conventions live here so the parser crate and any future
//! front ends agree on where configuration is found.

pub mod paths;

pub use paths::{expand_path, Paths};
