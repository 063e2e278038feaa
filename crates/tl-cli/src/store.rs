//! Day-file persistence for record sets.
//!
//! One CSV file per workdate under the configured data directory. The codec
//! itself lives in `tl-core`; this module owns path resolution and file I/O.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tl_core::{RecordSet, codec};

/// Returns the day file path for a workdate: `<data_dir>/<YYYY-MM-DD>.csv`.
pub fn day_file(data_dir: &Path, date: NaiveDate) -> PathBuf {
    data_dir.join(format!("{}.csv", date.format("%Y-%m-%d")))
}

/// Loads the record set for a day, creating an empty file on first use.
///
/// A malformed line aborts the load; nothing is mutated or written.
pub fn load(path: &Path) -> Result<RecordSet> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            fs::write(path, "").with_context(|| format!("failed to create {}", path.display()))?;
            String::new()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let records =
        codec::decode(&contents).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(RecordSet::new(records))
}

/// Serializes the record set and replaces the day file contents.
///
/// The whole set is encoded to memory first, so a failed write never leaves
/// a half-encoded file behind.
pub fn save(path: &Path, set: &RecordSet) -> Result<()> {
    let encoded = codec::encode(set.records());
    fs::write(path, encoded).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use chrono::TimeZone;
    use chrono::Utc;
    use tl_core::Record;

    fn tags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn day_file_uses_iso_date_and_csv_extension() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            day_file(Path::new("/data"), date),
            PathBuf::from("/data/2024-01-01.csv")
        );
    }

    #[test]
    fn load_creates_missing_file_and_directories() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("days").join("2024-01-01.csv");

        let set = load(&path).unwrap();
        assert!(set.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn load_round_trips_saved_records() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("2024-01-01.csv");

        let mut set = RecordSet::new(vec![Record::new(
            Utc.timestamp_opt(0, 0).unwrap(),
            Utc.timestamp_opt(3_600, 0).unwrap(),
            tags(&["x"]),
        )]);
        set.add(
            Utc.timestamp_opt(4_000, 0).unwrap(),
            Utc.timestamp_opt(5_000, 0).unwrap(),
            tags(&["y"]),
        );
        save(&path, &set).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.records(), set.records());
        assert!(reloaded.new_records().is_empty());
    }

    #[test]
    fn load_rejects_malformed_files() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("2024-01-01.csv");
        fs::write(&path, "0,3600,x\nnot a record\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.root_cause().to_string().contains("line 2"));
    }
}
