use std::io;

use thiserror::Error;

/// Failures that abort a filtering pass.
///
/// There is no local recovery: the first stream failure ends the pass,
/// and output already written stays on the output stream.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The input stream failed mid-read.
    #[error("failed to read input: {0}")]
    Read(io::Error),

    /// The output stream rejected a write or flush.
    #[error("failed to write output: {0}")]
    Write(io::Error),
}
