//! Core domain logic for the `tl` time logger.
//!
//! This crate contains the record state machine and aggregation engine:
//! - [`Record`]: a single tracked interval with its tag set
//! - [`codec`]: the on-disk CSV line format
//! - [`RecordSet`]: a day's ordered records with the open/closed invariant
//! - [`stats`]: the per-tag summary table
//!
//! Everything here is pure and free of process-wide state; the CLI shell
//! owns argument parsing, configuration, logging, and git synchronization.

pub mod codec;
mod record;
mod record_set;
pub mod stats;

pub use codec::MalformedRecord;
pub use record::Record;
pub use record_set::{IllegalOperation, RecordSet, SetState};
