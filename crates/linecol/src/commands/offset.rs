//! The `offset` command: line/column positions to byte offsets.

use linecol_core::PositionLookup;

use super::{answer_each, track_file, CliOptions, CommandError};

/// Answer one query: `<line>:<column>` becomes `<line>:<column> <offset>`.
///
/// With `--one-based` the query is read as counted from 1.
pub fn resolve_position(
    lookup: &impl PositionLookup,
    query: &str,
    options: &CliOptions,
) -> Result<String, CommandError> {
    let bad = || CommandError::BadPosition(query.to_string());
    let (line, column) = query.trim().split_once(':').ok_or_else(bad)?;
    let line: i64 = line.trim().parse().map_err(|_| bad())?;
    let column: i64 = column.trim().parse().map_err(|_| bad())?;

    let shift = i64::from(options.one_based);
    let offset = lookup.offset(line.saturating_sub(shift), column.saturating_sub(shift))?;
    Ok(format!("{line}:{column} {offset}"))
}

/// Track `path`, then answer each position query.
///
/// Returns the number of queries that failed.
pub fn run_offset(
    path: &str,
    queries: &[String],
    options: &CliOptions,
) -> Result<usize, CommandError> {
    let (reader, _) = track_file(path, options)?;
    Ok(answer_each(queries, |query| {
        resolve_position(&reader, query, options)
    }))
}
