//! Convention categorization.
//!
//! `ConventionsManager` owns the loaded record set and the three derived
//! buckets (current / upcoming / past). Buckets are fully recomputed on
//! every load; there is no incremental update and no persistence. The
//! reference date is injected at construction, which is also how tests pin
//! "today".

use crate::core::feed;
use crate::models::category::{Category, StatusLock};
use crate::models::convention::Convention;
use crate::ui::messages;
use crate::utils::date;
use chrono::NaiveDate;
use std::cmp::Reverse;

#[derive(Debug)]
pub struct ConventionsManager {
    today: NaiveDate,
    conventions: Vec<Convention>,
    current: Vec<Convention>,
    upcoming: Vec<Convention>,
    past: Vec<Convention>,
    malformed: usize,
}

impl Default for ConventionsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConventionsManager {
    pub fn new() -> Self {
        Self::with_today(date::today())
    }

    /// Manager anchored to an explicit reference date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today,
            conventions: Vec::new(),
            current: Vec::new(),
            upcoming: Vec::new(),
            past: Vec::new(),
            malformed: 0,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replaces the full record set and recategorizes.
    pub fn load(&mut self, records: Vec<Convention>) {
        self.conventions = records;
        self.categorize();
    }

    /// Loads the feed file at `path`. A missing or unparseable feed is
    /// logged and yields empty buckets; it never propagates to the caller,
    /// since a blank listing beats a crashed one.
    pub fn load_from_path(&mut self, path: &str) {
        match feed::read_feed(path) {
            Ok(records) => {
                self.load(records);
                if self.malformed > 0 {
                    messages::warning(format!(
                        "{} record(s) with unparseable dates were filed under \"past\"",
                        self.malformed
                    ));
                }
            }
            Err(e) => {
                messages::error(format!("Error loading conventions: {}", e));
                self.load(Vec::new());
            }
        }
    }

    /// Splits the loaded set into the three buckets, then orders upcoming
    /// ascending and past descending by start date.
    fn categorize(&mut self) {
        self.current.clear();
        self.malformed = 0;

        let today = self.today;
        let mut upcoming: Vec<(NaiveDate, Convention)> = Vec::new();
        let mut past: Vec<(NaiveDate, Convention)> = Vec::new();

        for convention in &self.conventions {
            let start = date::parse_date(&convention.dates.start);
            let end = date::parse_date(&convention.dates.end);

            match (start, end) {
                (Some(start), Some(end)) => {
                    if today < start {
                        upcoming.push((start, convention.clone()));
                    } else if today > end {
                        past.push((start, convention.clone()));
                    } else {
                        self.current.push(convention.clone());
                    }
                }
                // Unparseable dates: keep the record visible, file it as
                // past, and make it sort after every dated record.
                _ => {
                    self.malformed += 1;
                    past.push((NaiveDate::MIN, convention.clone()));
                }
            }
        }

        // sort_by_key is stable, so records sharing a start date keep
        // their feed order
        upcoming.sort_by_key(|(start, _)| *start);
        past.sort_by_key(|(start, _)| Reverse(*start));

        self.upcoming = upcoming.into_iter().map(|(_, c)| c).collect();
        self.past = past.into_iter().map(|(_, c)| c).collect();
    }

    pub fn bucket(&self, category: Category) -> &[Convention] {
        match category {
            Category::Current => &self.current,
            Category::Upcoming => &self.upcoming,
            Category::Past => &self.past,
        }
    }

    /// Bucket lookup by name. Unknown names yield an empty slice rather
    /// than an error; the rendering layer treats that as "nothing to show".
    pub fn conventions_by_category(&self, category: &str) -> &[Convention] {
        match Category::cat_from_str(category) {
            Some(cat) => self.bucket(cat),
            None => &[],
        }
    }

    /// Content for the "current" tab: the live events, or failing that the
    /// soonest upcoming convention as a preview.
    pub fn conventions_for_current_tab(&self) -> Vec<Convention> {
        if !self.current.is_empty() {
            self.current.clone()
        } else if let Some(next) = self.upcoming.first() {
            vec![next.clone()]
        } else {
            Vec::new()
        }
    }

    /// Content for the "next" tab. When something is live, every upcoming
    /// convention is "next"; otherwise the soonest one is already occupying
    /// the current tab, so it is skipped here.
    pub fn conventions_for_next_tab(&self) -> Vec<Convention> {
        if !self.current.is_empty() && !self.upcoming.is_empty() {
            self.upcoming.clone()
        } else if self.current.is_empty() && self.upcoming.len() > 1 {
            self.upcoming[1..].to_vec()
        } else {
            Vec::new()
        }
    }

    /// Pure date-window test, usable on any record whether or not it is part
    /// of the loaded set. Unparseable dates are never "current".
    pub fn is_current_convention(&self, convention: &Convention) -> bool {
        match (
            date::parse_date(&convention.dates.start),
            date::parse_date(&convention.dates.end),
        ) {
            (Some(start), Some(end)) => start <= self.today && self.today <= end,
            _ => false,
        }
    }

    /// Badge predicate: whether a record renders as "happening now". The
    /// editorial `statusLock` wins over the date window, but it never moves
    /// the record between buckets.
    pub fn is_displayed_as_current(&self, convention: &Convention) -> bool {
        match convention.status_lock {
            Some(StatusLock::Current) => true,
            Some(StatusLock::Upcoming) | Some(StatusLock::Past) => false,
            None => self.is_current_convention(convention),
        }
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    /// Number of records that failed date parsing in the last load.
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }
}
