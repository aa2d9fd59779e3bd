use std::io::{BufRead, Write};

use crate::error::FilterError;
use crate::extract::extract_pair;

/// Counters for one pass over an input stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Input lines consumed.
    pub lines: u64,
    /// Output lines written.
    pub emitted: u64,
}

/// Run the filter over an input stream.
///
/// For each input line that reports both a depth and a time, writes one
/// line of the form `<depth> <time>`. Processing is single-threaded and
/// line-at-a-time; the first read or write failure aborts the pass. The
/// writer is flushed once the input is exhausted.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();

    for line in input.lines() {
        let line = line.map_err(FilterError::Read)?;
        stats.lines += 1;

        if let Some((depth, time)) = extract_pair(&line) {
            writeln!(output, "{} {}", depth, time).map_err(FilterError::Write)?;
            stats.emitted += 1;
        }
    }

    output.flush().map_err(FilterError::Write)?;
    Ok(stats)
}
