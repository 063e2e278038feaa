//! Restart command for reopening the current record.

use std::io::Write;

use anyhow::Result;

use tl_core::RecordSet;

use crate::commands::util;

pub fn run<W: Write>(writer: &mut W, set: &mut RecordSet) -> Result<()> {
    set.restart()?;
    let label = set
        .records()
        .last()
        .map_or_else(String::new, |rec| util::join_tags(&rec.tags));
    writeln!(writer, "Restarted recording: {label}")?;
    Ok(())
}
