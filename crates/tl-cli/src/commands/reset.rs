//! Reset command for discarding the open record.

use std::io::Write;

use anyhow::Result;

use tl_core::RecordSet;

pub fn run<W: Write>(writer: &mut W, set: &mut RecordSet) -> Result<()> {
    set.reset()?;
    writeln!(writer, "Discarded the open record")?;
    Ok(())
}
