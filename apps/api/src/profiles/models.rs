use std::fmt;

use serde::{Deserialize, Serialize};

/// Sports offered by the profile forms. The empty string means "none chosen".
pub const SPORTS: &[&str] = &[
    "soccer",
    "basketball",
    "tennis",
    "volleyball",
    "swimming",
    "football",
    "golf",
    "table tennis",
    "badminton",
    "handball",
    "wrestling",
    "boxing",
    "cross country",
    "track",
    "baseball",
    "cricket",
    "ice hockey",
];

/// Returns true for a value from `SPORTS` or the empty string. Case-sensitive.
pub fn is_known_sport(sport: &str) -> bool {
    sport.is_empty() || SPORTS.contains(&sport)
}

/// Which roster a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Mentor => f.write_str("mentor"),
        }
    }
}

/// A single profile card.
///
/// `id` is only unique within its role's roster. `color` is never stored by
/// the roster; it is filled in from the current match set when listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Profile {
    pub fn new(id: u32, title: &str, content: &str, sport: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            sport: sport.to_string(),
            color: None,
        }
    }
}

/// Pending form input for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sport: String,
}
