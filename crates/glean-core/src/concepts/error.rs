use std::ops::Range;
use std::str::Utf8Error;

use thiserror::Error;

/// Traversal-time failures. Any of these aborts the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Byte range {start}..{end} of `{kind}` node is outside the {len}-byte source")]
    RangeOutOfBounds {
        kind: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Byte range {start}..{end} of `{kind}` node is not valid UTF-8: {source}")]
    InvalidUtf8 {
        kind: String,
        start: usize,
        end: usize,
        #[source]
        source: Utf8Error,
    },
}

impl ExtractionError {
    pub fn out_of_bounds(kind: &str, range: Range<usize>, len: usize) -> Self {
        ExtractionError::RangeOutOfBounds {
            kind: kind.to_string(),
            start: range.start,
            end: range.end,
            len,
        }
    }

    pub fn invalid_utf8(kind: &str, range: Range<usize>, source: Utf8Error) -> Self {
        ExtractionError::InvalidUtf8 {
            kind: kind.to_string(),
            start: range.start,
            end: range.end,
            source,
        }
    }
}
