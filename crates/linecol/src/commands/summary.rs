//! The `summary` command: what the tracker learned about a file.

use linecol_core::PositionTracker;

use super::{track_file, CliOptions, CommandError};

/// Describe a tracker that has read `bytes` bytes, one fact per line.
pub fn summarize(tracker: &PositionTracker, bytes: usize, options: &CliOptions) -> Vec<String> {
    let position = tracker
        .current_line_and_column()
        .map_or_else(|_| "none".to_string(), |pos| options.render(pos));

    let mut lines = vec![
        format!("bytes: {bytes}"),
        format!("completed lines: {}", tracker.completed_lines()),
        format!("position: {position}"),
    ];
    // A file may end in the middle of a character.
    let pending = tracker.pending_len();
    if pending > 0 {
        lines.push(format!("pending: {pending} bytes of an unfinished character"));
    }
    lines
}

/// Track `path` and print its summary.
pub fn run_summary(path: &str, options: &CliOptions) -> Result<(), CommandError> {
    let (reader, bytes) = track_file(path, options)?;
    for line in summarize(reader.tracker(), bytes, options) {
        println!("{line}");
    }
    Ok(())
}
