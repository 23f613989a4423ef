//! Alfred script filter output
//!
//! See https://www.alfredapp.com/help/workflows/inputs/script-filter/json/

use serde::{Deserialize, Serialize};

/// Top-level script filter document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items {
    pub items: Vec<Item>,
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// One result row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id Alfred uses to learn ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Passed to the next workflow step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    pub valid: bool,
}

impl Item {
    /// An actionable item
    pub fn action(uid: String, title: String, arg: String) -> Self {
        Self {
            uid: Some(uid),
            title,
            arg: Some(arg),
            valid: true,
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}
