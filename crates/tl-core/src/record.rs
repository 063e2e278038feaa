//! A single tracked time interval with its tag set.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// One tracked time interval with associated tags.
///
/// A record is *open* while its stop timestamp is absent or still equal to
/// its start timestamp. A freshly started record carries `stop == start`
/// until it is closed, which keeps the persisted form fully specified at
/// all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// When tracking started.
    pub start: DateTime<Utc>,
    /// When tracking stopped. `None` means the record is still open.
    pub stop: Option<DateTime<Utc>>,
    /// Labels used to categorize and aggregate this interval.
    pub tags: BTreeSet<String>,
}

impl Record {
    /// Creates a record spanning `start..stop`.
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>, tags: BTreeSet<String>) -> Self {
        Self {
            start,
            stop: Some(stop),
            tags,
        }
    }

    /// Creates a freshly opened record at `start`, with `stop == start`.
    pub fn open(start: DateTime<Utc>, tags: BTreeSet<String>) -> Self {
        Self {
            start,
            stop: Some(start),
            tags,
        }
    }

    /// Duration in seconds, `0.0` while the record is open.
    pub fn duration(&self) -> f64 {
        match self.stop {
            Some(stop) => (stop - self.start).as_seconds_f64(),
            None => 0.0,
        }
    }

    /// Whether this record has been finalized.
    ///
    /// A record with `stop == start` is NOT closed: that is the freshly
    /// opened form, indistinguishable on disk from a zero-duration record
    /// and deliberately treated as still running.
    pub fn closed(&self) -> bool {
        self.stop.is_some_and(|stop| stop != self.start)
    }
}
