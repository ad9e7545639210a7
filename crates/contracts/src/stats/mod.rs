//! Read-only aggregates over the day-keyed order cache.
//!
//! Everything here is a pure function of the cache snapshot: no hidden
//! state, identical input always yields identical output.

use chrono::{Datelike, NaiveDate};

use crate::domain::orders::OrderCache;

/// Time grouping for the order-count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Day,
    Week,
    Month,
}

/// One leaderboard row: a customer and how many orders they placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: usize,
}

/// One chart point: a bucket label and the orders counted into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub count: usize,
}

/// Orders per customer across all cached days, most orders first.
///
/// Names are trimmed and blank names excluded. Counting happens in cache
/// encounter order and the sort is stable, so customers with equal counts
/// keep first-seen order.
pub fn leaderboard(cache: &OrderCache) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    for order in cache.values().flatten() {
        let name = order.customer_name.trim();
        if name.is_empty() {
            continue;
        }
        match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.count += 1,
            None => entries.push(LeaderboardEntry {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Total number of orders across all cached days.
pub fn total(cache: &OrderCache) -> usize {
    cache.values().map(Vec::len).sum()
}

/// Order counts grouped into `bucket`-sized points, sorted ascending by
/// label (lexicographic, which is chronological for all three label
/// formats). Days with zero cached orders contribute nothing.
pub fn series(cache: &OrderCache, bucket: Bucket) -> Vec<SeriesPoint> {
    let mut points: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    for (day, orders) in cache {
        if orders.is_empty() {
            continue;
        }
        let Some(label) = bucket_label(day, bucket) else {
            continue;
        };
        *points.entry(label).or_default() += orders.len();
    }
    points
        .into_iter()
        .map(|(label, count)| SeriesPoint { label, count })
        .collect()
}

/// Label a day falls into for the given bucket.
///
/// The week number is `ceil(day_of_year / 7)`, the historical formula the
/// product has always used, deliberately NOT ISO-8601 week numbering, so
/// existing labels stay stable. Days that do not parse as `YYYY-MM-DD` (or
/// are too short for a month prefix) are skipped.
fn bucket_label(day: &str, bucket: Bucket) -> Option<String> {
    match bucket {
        Bucket::Day => Some(day.to_string()),
        Bucket::Month => day.get(..7).map(str::to_string),
        Bucket::Week => {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
            let week = (date.ordinal() + 6) / 7;
            Some(format!("{}-W{:02}", date.year(), week))
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::domain::orders::{cache::replace_day, Order};

    use super::*;

    fn order(name: &str, date: &str) -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_name: name.into(),
            kebab_type: "Pita".into(),
            size: "Standard".into(),
            sauce: "Mieszany".into(),
            meat_type: "Kurczak".into(),
            date: Some(date.into()),
        }
    }

    fn cache_of(days: &[(&str, &[&str])]) -> OrderCache {
        let mut cache = OrderCache::new();
        for (day, names) in days {
            replace_day(
                &mut cache,
                day,
                names.iter().map(|n| order(n, day)).collect(),
            );
        }
        cache
    }

    #[test]
    fn leaderboard_counts_and_ranks() {
        let cache = cache_of(&[("2024-01-01", &["Ann", "Bob", "Ann"])]);
        let board = leaderboard(&cache);
        assert_eq!(board.len(), 2);
        assert_eq!((board[0].name.as_str(), board[0].count), ("Ann", 2));
        assert_eq!((board[1].name.as_str(), board[1].count), ("Bob", 1));
    }

    #[test]
    fn leaderboard_trims_and_skips_blank_names() {
        let cache = cache_of(&[("2024-01-01", &["  Ann ", "   ", "Ann"])]);
        let board = leaderboard(&cache);
        assert_eq!(board.len(), 1);
        assert_eq!((board[0].name.as_str(), board[0].count), ("Ann", 2));
    }

    #[test]
    fn leaderboard_ties_keep_first_seen_order() {
        let cache = cache_of(&[("2024-01-01", &["Zofia", "Adam"])]);
        let board = leaderboard(&cache);
        assert_eq!(board[0].name, "Zofia");
        assert_eq!(board[1].name, "Adam");
    }

    #[test]
    fn total_spans_all_days() {
        let cache = cache_of(&[
            ("2024-01-05", &["A", "B"]),
            ("2024-01-20", &["C"]),
        ]);
        assert_eq!(total(&cache), 3);
    }

    #[test]
    fn series_by_day_orders_points_by_label() {
        let cache = cache_of(&[
            ("2024-01-20", &["C"]),
            ("2024-01-05", &["A", "B"]),
        ]);
        let points = series(&cache, Bucket::Day);
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].label.as_str(), points[0].count), ("2024-01-05", 2));
        assert_eq!((points[1].label.as_str(), points[1].count), ("2024-01-20", 1));
    }

    #[test]
    fn series_by_month_merges_days() {
        let cache = cache_of(&[
            ("2024-01-05", &["A", "B"]),
            ("2024-01-20", &["C"]),
        ]);
        let points = series(&cache, Bucket::Month);
        assert_eq!(points.len(), 1);
        assert_eq!((points[0].label.as_str(), points[0].count), ("2024-01", 3));
    }

    #[test]
    fn series_by_week_uses_day_of_year_arithmetic() {
        // Jan 5 is day 5 -> week 1; Jan 20 is day 20 -> week 3.
        let cache = cache_of(&[
            ("2024-01-05", &["A", "B"]),
            ("2024-01-20", &["C"]),
        ]);
        let points = series(&cache, Bucket::Week);
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].label.as_str(), points[0].count), ("2024-W01", 2));
        assert_eq!((points[1].label.as_str(), points[1].count), ("2024-W03", 1));
    }

    #[test]
    fn week_formula_is_not_iso_8601() {
        // Dec 31 of a leap year is day 366 -> week 53 under the legacy
        // formula (ISO would call it 2025-W01).
        let cache = cache_of(&[("2024-12-31", &["A"])]);
        let points = series(&cache, Bucket::Week);
        assert_eq!(points[0].label, "2024-W53");
    }

    #[test]
    fn empty_days_are_absent_from_series() {
        let mut cache = cache_of(&[("2024-01-05", &["A"])]);
        replace_day(&mut cache, "2024-01-06", Vec::new());
        let points = series(&cache, Bucket::Day);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "2024-01-05");
    }

    #[test]
    fn aggregates_are_pure() {
        let cache = cache_of(&[
            ("2024-01-05", &["A", "B"]),
            ("2024-02-01", &["A"]),
        ]);
        assert_eq!(leaderboard(&cache), leaderboard(&cache));
        assert_eq!(total(&cache), total(&cache));
        assert_eq!(series(&cache, Bucket::Week), series(&cache, Bucket::Week));
    }
}
