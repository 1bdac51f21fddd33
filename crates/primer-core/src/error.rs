//! Error types for primer

use core::fmt;
use std::io;

/// Result type for lesson operations
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Result type for checked slicing
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors that can occur while running a lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimerError {
    /// Slice bounds were invalid
    Slice(SliceError),

    /// Writing lesson output failed
    Io(io::ErrorKind),

    /// No lesson registered under this name
    UnknownLesson(String),
}

impl fmt::Display for PrimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimerError::Slice(e) => write!(f, "slice error: {}", e),
            PrimerError::Io(kind) => write!(f, "output error: {}", kind),
            PrimerError::UnknownLesson(name) => write!(f, "unknown lesson: {}", name),
        }
    }
}

impl std::error::Error for PrimerError {}

impl From<io::Error> for PrimerError {
    fn from(e: io::Error) -> Self {
        PrimerError::Io(e.kind())
    }
}

/// Invalid `[start, end)` bounds for a sequence of length `len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// Lower bound is greater than upper bound
    StartAfterEnd { start: usize, end: usize },

    /// Upper bound is past the end of the sequence
    EndOutOfRange { end: usize, len: usize },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::StartAfterEnd { start, end } => {
                write!(f, "slice bounds out of range [{}:{}]", start, end)
            }
            SliceError::EndOutOfRange { end, len } => {
                write!(f, "slice bounds out of range [:{}] with length {}", end, len)
            }
        }
    }
}

impl std::error::Error for SliceError {}

impl From<SliceError> for PrimerError {
    fn from(e: SliceError) -> Self {
        PrimerError::Slice(e)
    }
}
