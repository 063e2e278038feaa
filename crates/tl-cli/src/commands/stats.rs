//! Stats command for printing the per-tag summary.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use tl_core::{RecordSet, stats};

pub fn run<W: Write>(writer: &mut W, set: &RecordSet, date: NaiveDate) -> Result<()> {
    let summary = set.generate_stats();
    write!(writer, "{}", stats::format_stats(date, &summary))?;
    Ok(())
}
