//! Ordered per-day record collection enforcing the open/closed invariant.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::record::Record;

/// A command was applied to a record set in the wrong state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalOperation {
    /// `start` was called while a record is still open.
    #[error("cannot open a new record: the current record is still open")]
    AlreadyOpen,

    /// `stop`, `reset`, or `restart` was called with no open record.
    #[error("cannot {action}: no record is open")]
    NotOpen { action: &'static str },
}

/// Whole-set state, derived on demand from the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    /// No records.
    Empty,
    /// The last record is fully closed.
    Closed,
    /// The last record is open (`stop == start`).
    Open,
}

/// The ordered collection of one day's records plus the derived tag index.
///
/// Invariant: at most the last record may be open; everything before it is
/// closed. All mutating operations preserve this.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<Record>,
    marker: usize,
    tags: BTreeSet<String>,
}

impl RecordSet {
    /// Builds a set from persisted records, remembering how many existed at
    /// load time so that [`Self::new_records`] can report later additions.
    pub fn new(records: Vec<Record>) -> Self {
        let tags = records
            .iter()
            .flat_map(|rec| rec.tags.iter().cloned())
            .collect();
        let marker = records.len();
        Self {
            records,
            marker,
            tags,
        }
    }

    /// Current state, derived from the last record.
    pub fn state(&self) -> SetState {
        match self.records.last() {
            None => SetState::Empty,
            Some(last) if last.closed() => SetState::Closed,
            Some(_) => SetState::Open,
        }
    }

    /// Whether the set is closed as a whole: empty, or last record closed.
    pub fn is_closed(&self) -> bool {
        self.state() != SetState::Open
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// All records, in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records added since the set was loaded.
    pub fn new_records(&self) -> &[Record] {
        &self.records[self.marker.min(self.records.len())..]
    }

    /// Union of all tags seen across the records.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Opens a new record at the current instant.
    ///
    /// Fails if a record is already open; the set is left unchanged.
    pub fn start(&mut self, tags: BTreeSet<String>) -> Result<(), IllegalOperation> {
        if self.state() == SetState::Open {
            return Err(IllegalOperation::AlreadyOpen);
        }

        self.tags.extend(tags.iter().cloned());
        self.records.push(Record::open(now(), tags));
        Ok(())
    }

    /// Closes the currently open record at the current instant.
    pub fn stop(&mut self) -> Result<(), IllegalOperation> {
        match self.records.last_mut() {
            Some(last) if !last.closed() => {
                last.stop = Some(now());
                Ok(())
            }
            _ => Err(IllegalOperation::NotOpen { action: "stop" }),
        }
    }

    /// Removes the currently open record entirely.
    pub fn reset(&mut self) -> Result<(), IllegalOperation> {
        if self.state() != SetState::Open {
            return Err(IllegalOperation::NotOpen { action: "reset" });
        }
        self.records.pop();
        Ok(())
    }

    /// Reopens the current record with a fresh start timestamp.
    ///
    /// Composed from [`Self::reset`] and [`Self::start`] so the captured
    /// tags pass through the same tag-index bookkeeping as a normal start.
    pub fn restart(&mut self) -> Result<(), IllegalOperation> {
        let tags = match self.records.last() {
            Some(last) if !last.closed() => last.tags.clone(),
            _ => return Err(IllegalOperation::NotOpen { action: "restart" }),
        };

        self.reset()?;
        self.start(tags)
    }

    /// Backfills a fully closed record with explicit timestamps.
    ///
    /// Always succeeds. If a record is currently open, the new record is
    /// inserted immediately before it so the open record stays last.
    pub fn add(&mut self, from: DateTime<Utc>, to: DateTime<Utc>, tags: BTreeSet<String>) {
        self.tags.extend(tags.iter().cloned());
        let record = Record::new(from, to, tags);

        match self.state() {
            SetState::Open => {
                let last = self.records.len() - 1;
                self.records.insert(last, record);
            }
            SetState::Empty | SetState::Closed => self.records.push(record),
        }
    }

    /// Sums record durations per tag, in seconds.
    ///
    /// A record carrying several tags contributes its full duration to each
    /// of them. Tags that no longer have any records (e.g. after a reset)
    /// report zero.
    pub fn generate_stats(&self) -> BTreeMap<String, f64> {
        let mut summary = BTreeMap::new();
        for tag in &self.tags {
            let total: f64 = self
                .records
                .iter()
                .filter(|rec| rec.tags.contains(tag))
                .map(Record::duration)
                .sum();
            summary.insert(tag.clone(), total);
        }
        summary
    }
}

/// Current instant at full precision.
///
/// The codec truncates to microseconds on write; in-memory comparisons keep
/// the full resolution so consecutive calls always produce distinct stamps.
fn now() -> DateTime<Utc> {
    Utc::now()
}
