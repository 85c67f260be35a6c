//! Defines [`GeometrySerdeError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeometrySerdeError {
    /// The runtime kind of a geometry passed to the encoder is outside the
    /// closed set of supported kinds, or uses an unsupported dimension.
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// The encoded buffer is structurally invalid: unrecognized type tag, a
    /// declared count inconsistent with the remaining bytes, or trailing
    /// bytes after a complete top-level parse.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The encoded buffer ended before a field could be fully read.
    #[error("Truncated input: {expected} byte(s) required, {remaining} remaining")]
    TruncatedInput {
        /// Bytes required by the field being read.
        expected: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Collection nesting in the encoded buffer exceeds the decoder's limit.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    MaxDepthExceeded(usize),

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type GeometrySerdeResult<T> = std::result::Result<T, GeometrySerdeError>;
