use crate::core::manager::ConventionsManager;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::convention::Convention;
use serde::Serialize;
use std::path::Path;

/// The categorized view, in the shape a static site could serve back.
#[derive(Serialize)]
struct CategorizedFeed<'a> {
    current: &'a [Convention],
    upcoming: &'a [Convention],
    past: &'a [Convention],
}

/// Writes the three buckets as pretty-printed JSON.
pub fn write_json(path: &str, mgr: &ConventionsManager) -> AppResult<()> {
    let doc = CategorizedFeed {
        current: mgr.bucket(Category::Current),
        upcoming: mgr.bucket(Category::Upcoming),
        past: mgr.bucket(Category::Past),
    };

    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, json)?;

    super::notify_export_success("JSON", Path::new(path));
    Ok(())
}
