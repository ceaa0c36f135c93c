//! Input file loading
//!
//! Reads the authoritative member list and the managed group's query result.

use crate::error_ext::ErrorContext;
use memsync_domain::error::Result;
use memsync_domain::value_objects::{GroupQueryResult, MembershipSet};
use std::path::Path;

/// Load the authoritative member list from `path`
pub fn load_members(path: &Path) -> Result<MembershipSet> {
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read members file {}", path.display()))?;
    parse_members(&content)
}

/// Parse a member list.
///
/// A document starting with `[` is a JSON array of strings. Anything else is
/// one identifier per line, taken verbatim apart from the line ending; lines
/// that are blank or whose first non-space character is `#` are skipped.
pub fn parse_members(content: &str) -> Result<MembershipSet> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    Ok(content
        .lines()
        .filter(|line| {
            let visible = line.trim();
            !visible.is_empty() && !visible.starts_with('#')
        })
        .collect())
}

/// Load a group query result from a JSON file
pub fn load_group_query(path: &Path) -> Result<GroupQueryResult> {
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read group file {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}
