//! The `locate` command: byte offsets to line/column positions.

use linecol_core::PositionLookup;

use super::{answer_each, track_file, CliOptions, CommandError};

/// Answer one query: `<offset>` becomes `<offset> <line>:<column>`.
///
/// Negative offsets parse, and are rejected by the lookup as invalid input.
pub fn locate_offset(
    lookup: &impl PositionLookup,
    query: &str,
    options: &CliOptions,
) -> Result<String, CommandError> {
    let offset: i64 = query
        .trim()
        .parse()
        .map_err(|_| CommandError::BadOffset(query.to_string()))?;
    let pos = lookup.line_and_column(offset)?;
    Ok(format!("{offset} {}", options.render(pos)))
}

/// Track `path`, then answer each offset query.
///
/// Returns the number of queries that failed.
pub fn run_locate(
    path: &str,
    queries: &[String],
    options: &CliOptions,
) -> Result<usize, CommandError> {
    let (reader, _) = track_file(path, options)?;
    Ok(answer_each(queries, |query| {
        locate_offset(&reader, query, options)
    }))
}
