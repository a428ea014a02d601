use serde::{Deserialize, Serialize};
use std::fmt;

/// The three mutually exclusive buckets a convention can land in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Current,
    Upcoming,
    Past,
}

impl Category {
    pub fn cat_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "current" => Some(Self::Current),
            "upcoming" => Some(Self::Upcoming),
            "past" => Some(Self::Past),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Current, Self::Upcoming, Self::Past]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editorial override carried by a feed record. Read only by the display
/// predicate (the "Upcoming Convention" badge), never by the bucketing pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLock {
    Current,
    Upcoming,
    Past,
}
