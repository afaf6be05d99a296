//! Command handlers for the linecol CLI.
//!
//! Each submodule implements one command (locate, offset, summary). Option
//! parsing and streaming a file through the tracker are shared and live here
//! in the module root.

use std::fs::File;
use std::io::{self, Read};

use linecol_core::{LineColumn, PositionError};
use linecol_io::TrackingReader;

mod locate;
mod offset;
mod summary;

pub use locate::{locate_offset, run_locate};
pub use offset::{resolve_position, run_offset};
pub use summary::{run_summary, summarize};

/// Read buffer size used when `--chunk-size` is not given.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Options shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Bytes requested from the file per read.
    pub chunk_size: usize,
    /// Print and accept lines and columns counted from 1.
    pub one_based: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            one_based: false,
        }
    }
}

impl CliOptions {
    /// Render a position the way the user asked for it.
    pub fn render(&self, pos: LineColumn) -> String {
        if self.one_based {
            let (line, column) = pos.one_based();
            format!("{line}:{column}")
        } else {
            pos.to_string()
        }
    }
}

/// Errors reported by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Io { path: String, source: io::Error },

    #[error("'{0}' is not an integer offset")]
    BadOffset(String),

    #[error("'{0}' is not a <line>:<column> position")]
    BadPosition(String),

    #[error("'{0}' is not a valid chunk size")]
    BadChunkSize(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Split command arguments into options and positional arguments.
///
/// Flags may appear anywhere. Anything not starting with `--`, including
/// negative numbers, is positional.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), CommandError> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(size) = arg.strip_prefix("--chunk-size=") {
            options.chunk_size = match size.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(CommandError::BadChunkSize(size.to_string())),
            };
        } else if arg == "--one-based" {
            options.one_based = true;
        } else if arg.starts_with("--") {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}

/// Stream `source` through a tracker, `chunk_size` bytes at a time.
///
/// Returns the reader (for queries) and the number of bytes read.
pub fn track_source<R: Read>(
    source: R,
    options: &CliOptions,
) -> io::Result<(TrackingReader<R>, usize)> {
    let mut reader = TrackingReader::new(source);
    let mut buf = vec![0u8; options.chunk_size.max(1)];
    let mut total = 0usize;

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        bytes = total,
        lines = reader.tracker().completed_lines(),
        "source tracked"
    );
    Ok((reader, total))
}

/// Open `path` and stream it through a tracker.
pub(crate) fn track_file(
    path: &str,
    options: &CliOptions,
) -> Result<(TrackingReader<File>, usize), CommandError> {
    let io_error = |source: io::Error| CommandError::Io {
        path: path.to_string(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    track_source(file, options).map_err(io_error)
}

/// Print each query's answer, or an error for that query.
///
/// Returns the number of queries that failed.
pub(crate) fn answer_each<F>(queries: &[String], mut answer: F) -> usize
where
    F: FnMut(&str) -> Result<String, CommandError>,
{
    let mut failures = 0;
    for query in queries {
        match answer(query) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("error: {query}: {err}");
                failures += 1;
            }
        }
    }
    failures
}
