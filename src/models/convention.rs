use super::category::StatusLock;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range, kept as the raw "YYYY-MM-DD" strings the
/// feed carries. Parsing happens at comparison time so malformed input is
/// passed through instead of rejected at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConventionDates {
    pub start: String, // ⇔ dates.start ("YYYY-MM-DD")
    pub end: String,   // ⇔ dates.end   ("YYYY-MM-DD")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampRally {
    #[serde(rename = "type")]
    pub kind: String, // ⇔ stampRallies[].type (tab filter key)
    pub title: String,
    pub description: String,
    pub prize: String,
    pub participating_booths: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<GalleryImage>,
}

/// One convention record from the feed. Only `id`, `name`, `location` and
/// `dates` are required; everything else exists for the rendering layer and
/// may be absent depending on the record's category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Convention {
    pub id: String,
    pub name: String,
    pub location: String,
    pub dates: ConventionDates,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booth: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artist_alley_hours: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_image2: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stamp_rallies: Vec<StampRally>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalogue_images: Vec<GalleryImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_recap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_lock: Option<StatusLock>,
}

impl Convention {
    /// Minimal constructor covering the required fields; everything the
    /// rendering layer reads starts out empty.
    pub fn new(id: &str, name: &str, location: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            dates: ConventionDates {
                start: start.to_string(),
                end: end.to_string(),
            },
            venue: None,
            address: None,
            area: None,
            description: None,
            booth: None,
            artist_alley_hours: Vec::new(),
            map_image: None,
            map_image2: None,
            stamp_rallies: Vec::new(),
            catalogue_images: Vec::new(),
            event_recap: None,
            image: None,
            status_lock: None,
        }
    }

    pub fn with_status_lock(mut self, lock: StatusLock) -> Self {
        self.status_lock = Some(lock);
        self
    }
}
