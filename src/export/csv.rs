use crate::core::manager::ConventionsManager;
use crate::errors::AppResult;
use crate::models::category::Category;
use std::path::Path;

/// Writes one row per convention with its computed category, flat enough
/// for a spreadsheet.
pub fn write_csv(path: &str, mgr: &ConventionsManager) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "location", "start", "end", "category"])?;

    for cat in Category::all() {
        for convention in mgr.bucket(cat) {
            wtr.write_record([
                convention.id.as_str(),
                convention.name.as_str(),
                convention.location.as_str(),
                convention.dates.start.as_str(),
                convention.dates.end.as_str(),
                cat.as_str(),
            ])?;
        }
    }

    wtr.flush()?;

    super::notify_export_success("CSV", Path::new(path));
    Ok(())
}
