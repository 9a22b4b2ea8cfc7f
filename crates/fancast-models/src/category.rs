//! Subject category used to pick role phrasing in generated prompts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary subject category resolved from the uploaded photo.
///
/// `Primary` selects male-lead phrasing and is the fallback for any
/// classifier reply that does not clearly name the alternate category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    #[serde(alias = "male")]
    Primary,
    #[serde(alias = "female")]
    Alternate,
}

/// Reply substrings that resolve to [`Category::Alternate`].
const ALTERNATE_KEYWORDS: &[&str] = &["female", "woman"];

impl Category {
    /// Resolve a free-text classifier reply.
    ///
    /// Matching is case-insensitive and substring based; there is no
    /// third outcome.
    pub fn from_reply(reply: &str) -> Self {
        let normalized = reply.trim().to_lowercase();
        if ALTERNATE_KEYWORDS.iter().any(|k| normalized.contains(k)) {
            Category::Alternate
        } else {
            Category::Primary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Alternate => "alternate",
        }
    }

    /// Noun for the lead, as in "the woman from the reference photo".
    pub fn lead_noun(&self) -> &'static str {
        match self {
            Category::Primary => "man",
            Category::Alternate => "woman",
        }
    }

    /// Adjective for the lead, as in "the female lead".
    pub fn lead_adjective(&self) -> &'static str {
        match self {
            Category::Primary => "male",
            Category::Alternate => "female",
        }
    }

    /// Possessive pronoun for the lead.
    pub fn possessive(&self) -> &'static str {
        match self {
            Category::Primary => "his",
            Category::Alternate => "her",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
