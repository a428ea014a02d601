use chrono::NaiveDate;
use convtab::core::manager::ConventionsManager;
use convtab::models::convention::Convention;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn con(id: &str, start: &str, end: &str) -> Convention {
    Convention::new(id, id, "Somewhere", start, end)
}

fn ids(bucket: &[Convention]) -> Vec<&str> {
    bucket.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_buckets_partition_the_loaded_set() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![
        con("live", "2025-06-01", "2025-06-05"),
        con("future", "2025-08-08", "2025-08-10"),
        con("done", "2024-07-19", "2024-07-21"),
    ]);

    let mut all: Vec<&str> = Vec::new();
    all.extend(ids(mgr.conventions_by_category("current")));
    all.extend(ids(mgr.conventions_by_category("upcoming")));
    all.extend(ids(mgr.conventions_by_category("past")));
    all.sort();

    assert_eq!(all, vec!["done", "future", "live"]);
    assert_eq!(mgr.len(), 3);
}

#[test]
fn test_single_day_event_today_is_current() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![con("one-day", "2025-06-03", "2025-06-03")]);

    assert_eq!(ids(mgr.conventions_by_category("current")), vec!["one-day"]);
    assert!(mgr.conventions_by_category("upcoming").is_empty());
    assert!(mgr.conventions_by_category("past").is_empty());
}

#[test]
fn test_ended_yesterday_is_past_starts_tomorrow_is_upcoming() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![
        con("yesterday", "2025-06-01", "2025-06-02"),
        con("tomorrow", "2025-06-04", "2025-06-06"),
    ]);

    assert_eq!(ids(mgr.conventions_by_category("past")), vec!["yesterday"]);
    assert_eq!(ids(mgr.conventions_by_category("upcoming")), vec!["tomorrow"]);
    assert!(mgr.conventions_by_category("current").is_empty());
}

#[test]
fn test_upcoming_sorted_ascending_by_start() {
    let mut mgr = ConventionsManager::with_today(d("2024-12-01"));
    mgr.load(vec![
        con("march", "2025-03-01", "2025-03-02"),
        con("january", "2025-01-10", "2025-01-12"),
    ]);

    assert_eq!(
        ids(mgr.conventions_by_category("upcoming")),
        vec!["january", "march"]
    );
}

#[test]
fn test_past_sorted_descending_by_start() {
    let mut mgr = ConventionsManager::with_today(d("2025-12-01"));
    mgr.load(vec![
        con("spring", "2025-03-01", "2025-03-02"),
        con("summer", "2025-07-10", "2025-07-12"),
        con("old", "2024-05-01", "2024-05-03"),
    ]);

    assert_eq!(
        ids(mgr.conventions_by_category("past")),
        vec!["summer", "spring", "old"]
    );
}

#[test]
fn test_malformed_dates_go_to_past_and_sort_last() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![
        con("broken", "not-a-date", "2025-06-05"),
        con("done", "2024-07-19", "2024-07-21"),
    ]);

    assert_eq!(ids(mgr.conventions_by_category("past")), vec!["done", "broken"]);
    assert_eq!(mgr.malformed_count(), 1);
    assert!(mgr.conventions_by_category("current").is_empty());
    assert!(mgr.conventions_by_category("upcoming").is_empty());
}

#[test]
fn test_unknown_category_yields_empty_slice() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![con("live", "2025-06-01", "2025-06-05")]);

    assert!(mgr.conventions_by_category("cancelled").is_empty());
    assert!(mgr.conventions_by_category("").is_empty());
}

#[test]
fn test_reload_replaces_previous_state() {
    let mut mgr = ConventionsManager::with_today(d("2025-06-03"));
    mgr.load(vec![con("first", "2025-06-01", "2025-06-05")]);
    assert_eq!(ids(mgr.conventions_by_category("current")), vec!["first"]);

    mgr.load(vec![con("second", "2025-08-01", "2025-08-03")]);
    assert!(mgr.conventions_by_category("current").is_empty());
    assert_eq!(ids(mgr.conventions_by_category("upcoming")), vec!["second"]);
    assert_eq!(mgr.len(), 1);
}

#[test]
fn test_is_current_convention_is_a_pure_predicate() {
    let mgr = ConventionsManager::with_today(d("2025-06-03"));

    // records never loaded into the manager
    assert!(mgr.is_current_convention(&con("live", "2025-06-01", "2025-06-05")));
    assert!(!mgr.is_current_convention(&con("future", "2025-08-08", "2025-08-10")));
    assert!(!mgr.is_current_convention(&con("broken", "n/a", "2025-06-05")));
}
