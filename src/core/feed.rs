//! Reading the conventions feed document.
//!
//! The feed is the JSON file the site serves at `/data/conventions.json`:
//! a top-level object with a `conventions` array. Transport is a plain file
//! read here; anything fancier is the caller's business.

use crate::errors::AppResult;
use crate::models::convention::Convention;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeedDocument {
    #[serde(default)]
    pub conventions: Vec<Convention>,
}

pub fn read_feed(path: &str) -> AppResult<Vec<Convention>> {
    let raw = std::fs::read_to_string(path)?;
    let doc: FeedDocument = serde_json::from_str(&raw)?;
    Ok(doc.conventions)
}
