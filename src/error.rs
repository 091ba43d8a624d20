//! Error types for the public API

use std::path::PathBuf;

use thiserror::Error;

/// Error type for segmentation operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes do not decode to well-formed UTF-8
    #[error("invalid encoding: input is not well-formed UTF-8 at byte {offset}")]
    InvalidEncoding {
        /// Byte offset of the first undecodable sequence
        offset: usize,
    },

    /// A rule-set edit addressed a position that does not exist
    #[error("invalid tailoring: rule index {index} out of range (rule set has {len} rules)")]
    InvalidTailoring {
        /// The offending index
        index: usize,
        /// Number of tailorable rules in the set
        len: usize,
    },

    /// A Unicode data file could not be loaded or parsed
    #[error("failed to load table data from {path} (line {line}): {reason}")]
    DataLoad {
        /// Source file the table was read from
        path: PathBuf,
        /// 1-based line number of the offending line (0 when the file
        /// itself could not be opened)
        line: usize,
        /// Human-readable description of the failure
        reason: String,
    },
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;
