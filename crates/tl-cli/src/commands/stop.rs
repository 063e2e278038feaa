//! Stop command for closing the open record.

use std::io::Write;

use anyhow::Result;

use tl_core::{Record, RecordSet};

pub fn run<W: Write>(writer: &mut W, set: &mut RecordSet) -> Result<()> {
    set.stop()?;
    let seconds = set.records().last().map_or(0.0, Record::duration);
    writeln!(writer, "Stopped recording after {}", format_duration(seconds))?;
    Ok(())
}

/// Formats seconds as "Xh Ym" if at least an hour, "Xm" otherwise.
fn format_duration(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let total_minutes = (seconds / 60.0).floor() as i64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
