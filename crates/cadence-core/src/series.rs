use std::collections::BTreeMap;
use std::ops::Index;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Commit authorship times, one per commit record, in response order.
///
/// The forge serves commits newest-first by default, so index 0 is normally
/// the most recent commit. The sequence is positionally indexed; nothing is
/// filtered, deduplicated, or re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitTimes(Vec<DateTime<Utc>>);

impl CommitTimes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_vec(times: Vec<DateTime<Utc>>) -> Self {
        Self(times)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DateTime<Utc>> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateTime<Utc>> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DateTime<Utc>] {
        &self.0
    }

    /// First entry in response order (the most recent commit under the
    /// forge's default ordering).
    pub fn first(&self) -> Option<&DateTime<Utc>> {
        self.0.first()
    }

    /// Last entry in response order.
    pub fn last(&self) -> Option<&DateTime<Utc>> {
        self.0.last()
    }

    /// Latest timestamp by value, wherever it sits in the sequence.
    pub fn newest(&self) -> Option<DateTime<Utc>> {
        self.0.iter().max().copied()
    }

    /// Earliest timestamp by value, wherever it sits in the sequence.
    pub fn oldest(&self) -> Option<DateTime<Utc>> {
        self.0.iter().min().copied()
    }

    /// Extent between the oldest and newest entry. None when empty.
    pub fn span(&self) -> Option<Duration> {
        Some(self.newest()? - self.oldest()?)
    }

    /// Commits per UTC calendar day, ascending by date.
    ///
    /// A derived view for activity summaries; the sequence itself keeps its
    /// response order.
    pub fn counts_by_day(&self) -> BTreeMap<NaiveDate, usize> {
        let mut days = BTreeMap::new();
        for time in &self.0 {
            *days.entry(time.date_naive()).or_insert(0) += 1;
        }
        days
    }
}

impl Index<usize> for CommitTimes {
    type Output = DateTime<Utc>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<DateTime<Utc>>> for CommitTimes {
    fn from(times: Vec<DateTime<Utc>>) -> Self {
        Self(times)
    }
}

impl FromIterator<DateTime<Utc>> for CommitTimes {
    fn from_iter<I: IntoIterator<Item = DateTime<Utc>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CommitTimes {
    type Item = DateTime<Utc>;
    type IntoIter = std::vec::IntoIter<DateTime<Utc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommitTimes {
    type Item = &'a DateTime<Utc>;
    type IntoIter = std::slice::Iter<'a, DateTime<Utc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp should parse")
    }

    /// Three commits across two days, newest first, as the forge serves them.
    fn reverse_chronological() -> CommitTimes {
        CommitTimes::from_vec(vec![
            ts("2023-01-16T08:00:00Z"),
            ts("2023-01-15T18:45:00Z"),
            ts("2023-01-15T10:30:00Z"),
        ])
    }

    // ---- order and positional access ----

    #[test]
    fn preserves_input_order() {
        let times = reverse_chronological();
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], ts("2023-01-16T08:00:00Z"));
        assert_eq!(times[1], ts("2023-01-15T18:45:00Z"));
        assert_eq!(times[2], ts("2023-01-15T10:30:00Z"));
    }

    #[test]
    fn get_is_positional_and_bounds_checked() {
        let times = reverse_chronological();
        assert_eq!(times.get(2), Some(&ts("2023-01-15T10:30:00Z")));
        assert_eq!(times.get(3), None);
    }

    #[test]
    fn first_and_last_follow_response_order() {
        let times = reverse_chronological();
        assert_eq!(times.first(), Some(&ts("2023-01-16T08:00:00Z")));
        assert_eq!(times.last(), Some(&ts("2023-01-15T10:30:00Z")));
    }

    #[test]
    fn collects_from_iterator_in_order() {
        let source = vec![ts("2023-03-01T00:00:00Z"), ts("2023-03-02T00:00:00Z")];
        let times: CommitTimes = source.iter().copied().collect();
        assert_eq!(times.as_slice(), source.as_slice());
    }

    // ---- value extremes ----

    #[test]
    fn newest_and_oldest_ignore_position() {
        // Deliberately shuffled: the extremes sit in the middle.
        let times = CommitTimes::from_vec(vec![
            ts("2023-01-15T18:45:00Z"),
            ts("2023-01-16T08:00:00Z"),
            ts("2023-01-14T02:00:00Z"),
            ts("2023-01-15T10:30:00Z"),
        ]);
        assert_eq!(times.newest(), Some(ts("2023-01-16T08:00:00Z")));
        assert_eq!(times.oldest(), Some(ts("2023-01-14T02:00:00Z")));
    }

    #[test]
    fn span_covers_the_extremes() {
        let times = reverse_chronological();
        let span = times.span().expect("non-empty series has a span");
        assert_eq!(span, ts("2023-01-16T08:00:00Z") - ts("2023-01-15T10:30:00Z"));
    }

    // ---- daily buckets ----

    #[test]
    fn counts_by_day_buckets_per_utc_date() {
        let days = reverse_chronological().counts_by_day();
        assert_eq!(days.len(), 2);
        assert_eq!(days[&ts("2023-01-15T10:30:00Z").date_naive()], 2);
        assert_eq!(days[&ts("2023-01-16T08:00:00Z").date_naive()], 1);
    }

    #[test]
    fn counts_by_day_iterates_ascending() {
        let days = reverse_chronological().counts_by_day();
        let dates: Vec<NaiveDate> = days.keys().copied().collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    // ---- empty series ----

    #[test]
    fn empty_series_is_valid() {
        let times = CommitTimes::new();
        assert_eq!(times.len(), 0);
        assert!(times.is_empty());
        assert_eq!(times.first(), None);
        assert_eq!(times.newest(), None);
        assert_eq!(times.span(), None);
        assert!(times.counts_by_day().is_empty());
    }
}
