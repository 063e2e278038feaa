//! Shared utilities for CLI commands.

use std::collections::BTreeSet;

/// Normalizes user-supplied tag arguments into a tag set.
///
/// Each argument may itself be a comma-separated list; blank segments
/// collapse away and duplicates are dropped.
pub fn parse_tags(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Renders a tag set for user-facing messages.
pub fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
