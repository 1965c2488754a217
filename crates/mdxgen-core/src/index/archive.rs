//! Chronological year/month archive.
//!
//! Posts are bucketed by the calendar year and month of their `created`
//! timestamp. Year buckets exist only for years that hold at least one post
//! and are kept ascending; within a year, month slots exist only when
//! populated. Posts inside a month stay ascending by `created`.
//!
//! Display order is intentionally split: [`Archive::list`] returns years
//! ascending but sorts each year's populated months *descending* (most
//! recent month first), while the posts inside each month remain ascending.
//! Both orderings are part of the observable contract.

use crate::index::paginate::{PageMap, insert_sorted, paginate_into};
use crate::types::PostLike;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// One populated month: `month` is 0-indexed, posts ascending by `created`.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveMonth<P> {
    pub month: u32,
    pub posts: Vec<P>,
}

#[derive(Debug, Clone)]
struct ArchiveYear<P> {
    year: i32,
    total: usize,
    months: [Option<ArchiveMonth<P>>; 12],
}

/// A year with its populated months in display order (descending).
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveYearList<P> {
    pub year: i32,
    pub total: usize,
    pub months: Vec<ArchiveMonth<P>>,
}

/// Post-free month summary; `month` is 1-indexed for display.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveMonthSummary {
    pub month: u32,
    pub total: usize,
}

/// Post-free year summary.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveYearSummary {
    pub year: i32,
    pub total: usize,
    pub months: Vec<ArchiveMonthSummary>,
}

/// The archive index over every added post.
///
/// `start`/`end` are the running min/max `created` across all adds; `total`
/// counts every add. All three update on every insertion.
#[derive(Debug, Clone)]
pub struct Archive<P> {
    years: Vec<ArchiveYear<P>>,
    total: usize,
    start: i64,
    end: i64,
}

fn calendar(created: i64) -> (i32, u32) {
    // Defensive fallback to the epoch for out-of-range timestamps; date
    // resolution upstream already replaced unparsable inputs.
    let date = DateTime::<Utc>::from_timestamp_millis(created).unwrap_or_default();
    (date.year(), date.month0())
}

impl<P> Default for Archive<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Archive<P> {
    /// An empty archive. `start` seeds with "now" and `end` with the epoch;
    /// the first add overwrites both.
    #[must_use]
    pub fn new() -> Self {
        Self {
            years: Vec::new(),
            total: 0,
            start: Utc::now().timestamp_millis(),
            end: 0,
        }
    }

    /// Total number of posts added.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Smallest `created` timestamp seen.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Largest `created` timestamp seen.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of populated years.
    #[must_use]
    pub fn years(&self) -> usize {
        self.years.len()
    }

    /// Number of populated (year, month) buckets.
    #[must_use]
    pub fn months(&self) -> usize {
        self.years
            .iter()
            .map(|y| y.months.iter().flatten().count())
            .sum()
    }
}

impl<P: PostLike> Archive<P> {
    /// Bucket a post by the calendar year/month of its `created` timestamp.
    ///
    /// Creates the year bucket on first encounter (inserted at the position
    /// keeping years ascending) and the month slot on first encounter;
    /// within the month, the post lands at its binary-insertion position so
    /// the list stays ascending by `created`.
    pub fn add(&mut self, post: P) {
        let created = post.created();
        let (year, month) = calendar(created);

        let year_bucket = match self.years.binary_search_by_key(&year, |y| y.year) {
            Ok(idx) => &mut self.years[idx],
            Err(idx) => {
                self.years.insert(
                    idx,
                    ArchiveYear {
                        year,
                        total: 0,
                        months: std::array::from_fn(|_| None),
                    },
                );
                &mut self.years[idx]
            },
        };

        year_bucket.total += 1;
        let slot = &mut year_bucket.months[month as usize];
        let month_bucket = slot.get_or_insert_with(|| ArchiveMonth {
            month,
            posts: Vec::new(),
        });
        insert_sorted(&mut month_bucket.posts, post, |a, b| {
            a.created().cmp(&b.created())
        });

        self.total += 1;
        if created > self.end {
            self.end = created;
        }
        if created < self.start {
            self.start = created;
        }
    }
}

impl<P: Clone> Archive<P> {
    /// Display view: years ascending, each year's populated months sorted
    /// descending by month number.
    #[must_use]
    pub fn list(&self) -> Vec<ArchiveYearList<P>> {
        self.years
            .iter()
            .map(|year| {
                let mut months: Vec<ArchiveMonth<P>> =
                    year.months.iter().flatten().cloned().collect();
                months.sort_by(|a, b| b.month.cmp(&a.month));
                ArchiveYearList {
                    year: year.year,
                    total: year.total,
                    months,
                }
            })
            .collect()
    }

    /// Summary view with post payloads stripped; month numbers 1-indexed.
    #[must_use]
    pub fn without_posts(&self) -> Vec<ArchiveYearSummary> {
        self.years
            .iter()
            .map(|year| {
                let mut months: Vec<ArchiveMonthSummary> = year
                    .months
                    .iter()
                    .flatten()
                    .map(|m| ArchiveMonthSummary {
                        month: m.month + 1,
                        total: m.posts.len(),
                    })
                    .collect();
                months.sort_by(|a, b| b.month.cmp(&a.month));
                ArchiveYearSummary {
                    year: year.year,
                    total: year.total,
                    months,
                }
            })
            .collect()
    }

    /// Paginate every populated month under the scope key
    /// `"{year}/{month+1}"` (months 1-indexed in the key).
    #[must_use]
    pub fn paginate(&self, size: usize) -> PageMap<P> {
        let mut map = PageMap::new();
        for year in &self.years {
            for month in year.months.iter().flatten() {
                let scope = format!("{}/{}", year.year, month.month + 1);
                paginate_into(&mut map, &scope, &month.posts, size);
            }
        }
        map
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::PostPreview;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis()
    }

    fn post(id: &str, created: i64) -> PostPreview {
        PostPreview {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            created,
            updated: created,
            author: "jane".to_string(),
            tags: vec![],
            category: vec![],
        }
    }

    #[test]
    fn test_year_and_month_buckets_are_sparse() {
        let mut archive = Archive::new();
        archive.add(post("mar", at(2021, 3, 10)));
        archive.add(post("jul", at(2021, 7, 1)));

        assert_eq!(archive.years(), 1);
        assert_eq!(archive.months(), 2);

        let list = archive.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].year, 2021);
        assert_eq!(list[0].total, 2);
        // Only the populated months exist.
        assert_eq!(list[0].months.len(), 2);
    }

    #[test]
    fn test_years_ascend_months_descend() {
        let mut archive = Archive::new();
        archive.add(post("b", at(2022, 1, 1)));
        archive.add(post("a", at(2020, 6, 1)));
        archive.add(post("c", at(2020, 2, 1)));

        let list = archive.list();
        let years: Vec<i32> = list.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2020, 2022]);

        // 2020 holds June and February; display order is June first.
        let months: Vec<u32> = list[0].months.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![5, 1]);
    }

    #[test]
    fn test_posts_within_month_ascend_by_created() {
        let mut archive = Archive::new();
        archive.add(post("late", at(2021, 3, 20)));
        archive.add(post("early", at(2021, 3, 2)));
        archive.add(post("mid", at(2021, 3, 10)));

        let list = archive.list();
        let ids: Vec<&str> = list[0].months[0]
            .posts
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_running_bounds_and_total() {
        let mut archive = Archive::new();
        let lo = at(2019, 11, 3);
        let hi = at(2023, 4, 8);
        archive.add(post("mid", at(2021, 1, 1)));
        archive.add(post("hi", hi));
        archive.add(post("lo", lo));

        assert_eq!(archive.total(), 3);
        assert_eq!(archive.start(), lo);
        assert_eq!(archive.end(), hi);
    }

    #[test]
    fn test_paginate_keys_are_one_indexed() {
        let mut archive = Archive::new();
        for day in 1..=5 {
            archive.add(post(&format!("p{day}"), at(2021, 3, day)));
        }
        archive.add(post("other", at(2020, 12, 1)));

        let map = archive.paginate(2);
        assert!(map.contains_key("2021/3"));
        assert!(map.contains_key("2020/12"));

        let pages = map.get("2021/3").unwrap();
        assert_eq!(pages.len(), 3);
        let ids: Vec<&str> = pages.iter().flatten().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_without_posts_summary() {
        let mut archive = Archive::new();
        archive.add(post("a", at(2021, 3, 1)));
        archive.add(post("b", at(2021, 3, 2)));
        archive.add(post("c", at(2021, 7, 1)));

        let summary = archive.without_posts();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total, 3);

        // 1-indexed months, descending, with per-month counts.
        let months: Vec<(u32, usize)> = summary[0]
            .months
            .iter()
            .map(|m| (m.month, m.total))
            .collect();
        assert_eq!(months, vec![(7, 1), (3, 2)]);
    }
}
