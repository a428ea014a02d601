use chrono::NaiveDate;

/// "Today" anchored to UTC. Feed dates are calendar dates with no timezone
/// component, so comparing them against a UTC day keeps the classification
/// stable near midnight regardless of the host timezone.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Full English weekday name of a "YYYY-MM-DD" string, if it parses.
pub fn weekday_name(s: &str) -> Option<String> {
    parse_date(s).map(|d| d.format("%A").to_string())
}
