//! On-disk line format for records.
//!
//! Day files are headerless CSV, one record per line:
//! `start_epoch_seconds,stop_epoch_seconds,space-joined tags`.
//!
//! Timestamps are fractional epoch seconds, kept at microsecond resolution
//! so that `decode(encode(r)) == r` for every fully specified record.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::record::Record;

/// A persisted line that does not decode into a [`Record`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    /// The line did not have exactly three comma-separated fields.
    #[error("malformed record on line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A timestamp field did not parse as epoch seconds.
    #[error("malformed record on line {line}: invalid timestamp {value:?}")]
    Timestamp { line: usize, value: String },
}

/// Decodes a whole day file, one record per line, in file order.
///
/// Fails on the first invalid line; no partial recovery is attempted.
pub fn decode(contents: &str) -> Result<Vec<Record>, MalformedRecord> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| decode_line(idx + 1, line))
        .collect()
}

/// Decodes a single persisted line into a record.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line_no: usize, line: &str) -> Result<Record, MalformedRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(MalformedRecord::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let start = parse_timestamp(line_no, fields[0])?;
    let stop = parse_timestamp(line_no, fields[1])?;

    // Tags are split on single spaces; empty segments (and therefore an
    // empty tag field) yield no tags.
    let tags: BTreeSet<String> = fields[2]
        .split(' ')
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(Record::new(start, stop, tags))
}

/// Encodes one record as a persisted line, without a trailing newline.
///
/// An absent stop timestamp encodes in the self-consistent `stop == start`
/// form, which decodes back to an open record.
pub fn encode_record(record: &Record) -> String {
    let stop = record.stop.unwrap_or(record.start);
    let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
    format!(
        "{},{},{}",
        encode_timestamp(record.start),
        encode_timestamp(stop),
        tags.join(" ")
    )
}

/// Encodes a sequence of records, one line each, in order.
pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

fn parse_timestamp(line: usize, field: &str) -> Result<DateTime<Utc>, MalformedRecord> {
    let malformed = || MalformedRecord::Timestamp {
        line,
        value: field.to_string(),
    };

    let secs: f64 = field.trim().parse().map_err(|_| malformed())?;
    if !secs.is_finite() {
        return Err(malformed());
    }

    // Float-to-int casts saturate, so out-of-range values are caught by the
    // chrono range check below.
    #[allow(clippy::cast_possible_truncation)]
    let micros = (secs * 1_000_000.0).round() as i64;
    DateTime::from_timestamp_micros(micros).ok_or_else(malformed)
}

#[allow(clippy::cast_precision_loss)]
fn encode_timestamp(ts: DateTime<Utc>) -> String {
    let secs = ts.timestamp_micros() as f64 / 1_000_000.0;
    format!("{secs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn tags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn decodes_three_field_line() {
        let rec = decode_line(1, "1000,4600,work deep").unwrap();
        assert_eq!(rec.start, ts(1_000));
        assert_eq!(rec.stop, Some(ts(4_600)));
        assert_eq!(rec.tags, tags(&["deep", "work"]));
    }

    #[test]
    fn decodes_fractional_timestamps() {
        let rec = decode_line(1, "0.25,1.75,x").unwrap();
        assert_eq!(rec.start.timestamp_micros(), 250_000);
        assert_eq!(rec.stop.unwrap().timestamp_micros(), 1_750_000);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            decode_line(3, "1000,2000"),
            Err(MalformedRecord::FieldCount { line: 3, found: 2 })
        );
        assert_eq!(
            decode_line(3, "1000,2000,x,y"),
            Err(MalformedRecord::FieldCount { line: 3, found: 4 })
        );
    }

    #[test]
    fn rejects_non_numeric_timestamps() {
        let err = decode_line(2, "yesterday,2000,x").unwrap_err();
        assert_eq!(
            err,
            MalformedRecord::Timestamp {
                line: 2,
                value: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_finite_timestamps() {
        // "NaN" and "inf" parse as f64 but are not instants.
        assert!(decode_line(1, "NaN,2000,x").is_err());
        assert!(decode_line(1, "0,inf,x").is_err());
    }

    #[test]
    fn empty_tag_field_yields_empty_set() {
        let rec = decode_line(1, "0,0,").unwrap();
        assert!(rec.tags.is_empty());
    }

    #[test]
    fn tag_field_collapses_duplicates_and_blanks() {
        let rec = decode_line(1, "0,0,a  b a").unwrap();
        assert_eq!(rec.tags, tags(&["a", "b"]));
    }

    #[test]
    fn decode_reports_first_offending_line() {
        let err = decode("0,3600,x\nbad\n0,60,y").unwrap_err();
        assert_eq!(err, MalformedRecord::FieldCount { line: 2, found: 1 });
    }

    #[test]
    fn decode_preserves_file_order() {
        let records = decode("100,200,a\n300,400,b\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, ts(100));
        assert_eq!(records[1].start, ts(300));
    }

    #[test]
    fn decode_empty_contents_yields_no_records() {
        assert_eq!(decode("").unwrap(), Vec::new());
    }

    #[test]
    fn round_trips_fully_specified_records() {
        let rec = Record::new(
            DateTime::from_timestamp_micros(1_000_500_000).unwrap(),
            DateTime::from_timestamp_micros(2_000_250_000).unwrap(),
            tags(&["work", "deep"]),
        );
        let decoded = decode_line(1, &encode_record(&rec)).unwrap();
        assert_eq!(decoded, rec);
    }

    #[test]
    fn encodes_absent_stop_as_self_consistent_open_form() {
        let rec = Record {
            start: ts(1_000),
            stop: None,
            tags: tags(&["work"]),
        };
        assert_eq!(encode_record(&rec), "1000,1000,work");

        let decoded = decode_line(1, &encode_record(&rec)).unwrap();
        assert!(!decoded.closed());
    }

    #[test]
    fn encode_emits_one_line_per_record() {
        let records = vec![
            Record::new(ts(0), ts(3_600), tags(&["x"])),
            Record::open(ts(4_000), tags(&["y"])),
        ];
        assert_eq!(encode(&records), "0,3600,x\n4000,4000,y\n");
    }
}
