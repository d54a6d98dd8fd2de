//! Scanner error taxonomy

use thiserror::Error;

/// Failure modes of a single scan, classified at the open/extract boundary.
///
/// `Read` and `Encrypted` are user input errors with fixed short messages;
/// `Unexpected` covers invariant violations (a workbook with no sheets, a
/// sheet that cannot be extracted) and carries the full diagnostic chain.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The path does not name a spreadsheet that can be opened and read.
    #[error("given file could not be read")]
    Read(#[source] calamine::Error),

    /// The workbook is password protected and cannot be decoded.
    #[error("given file is password protected")]
    Encrypted,

    /// A failure that should not occur on well-formed input.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
