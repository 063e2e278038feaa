//! Start command for opening a new record.

use std::io::Write;

use anyhow::Result;

use tl_core::RecordSet;

use crate::commands::util;

pub fn run<W: Write>(writer: &mut W, set: &mut RecordSet, tags: &[String]) -> Result<()> {
    let tags = util::parse_tags(tags);
    let label = util::join_tags(&tags);
    set.start(tags)?;
    writeln!(writer, "Started recording: {label}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_a_record_and_reports_the_tags() {
        let mut set = RecordSet::new(vec![]);
        let mut output = Vec::new();

        run(&mut output, &mut set, &["work".to_string()]).unwrap();

        assert!(!set.is_closed());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Started recording: work\n"
        );
    }

    #[test]
    fn fails_while_a_record_is_open() {
        let mut set = RecordSet::new(vec![]);
        let mut output = Vec::new();
        run(&mut output, &mut set, &["a".to_string()]).unwrap();

        let err = run(&mut output, &mut set, &["b".to_string()]).unwrap_err();
        assert!(err.to_string().contains("still open"));
        assert_eq!(set.len(), 1);
    }
}
