//! Add command for backfilling a closed record.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use tl_core::RecordSet;

use crate::commands::util;

pub fn run<W: Write>(
    writer: &mut W,
    set: &mut RecordSet,
    date: NaiveDate,
    from: NaiveTime,
    to: NaiveTime,
    tags: &[String],
) -> Result<()> {
    let from_ts = local_to_utc(date, from)?;
    let to_ts = local_to_utc(date, to)?;
    if to_ts < from_ts {
        bail!("--to {to} is earlier than --from {from}");
    }

    let tags = util::parse_tags(tags);
    let label = util::join_tags(&tags);
    set.add(from_ts, to_ts, tags);
    writeln!(writer, "Added record {from} to {to}: {label}")?;
    Ok(())
}

/// Converts a wall-clock time on the workdate to UTC.
/// DST ambiguity resolves to the earlier instant.
fn local_to_utc(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>> {
    let naive = date.and_time(time);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => bail!("{naive} does not exist in the local timezone"),
    }
}
