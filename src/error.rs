use thiserror::Error;

/// Everything that can terminate a decode.
///
/// Every variant is terminal for the current decode: no retries, no partial
/// results past the failing stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Pixel grid width and height differ.
    #[error("pixel grid is not square ({width}x{height})")]
    NotSquare {
        /// Grid width in pixels.
        width: usize,
        /// Grid height in pixels.
        height: usize,
    },

    /// Dimension minus 17 is not divisible by 4.
    #[error("invalid module dimension {0}: expected 17 + 4 * version")]
    InvalidDimension(usize),

    /// Resolved version falls outside 1..=40.
    #[error("version {0} is outside the valid range 1..=40")]
    UnsupportedVersion(usize),

    /// Versions 7+ use alignment patterns and a format scheme not modeled here.
    #[error("version {0} is not implemented (only versions 1-6 are decodable)")]
    VersionNotImplemented(u8),

    /// Decoded mask pattern id fell outside 0..=7.
    #[error("format info yielded mask pattern id {0}, outside 0..=7")]
    FormatInfoOutOfRange(u8),

    /// The mode indicator names a mode this decoder does not decode.
    #[error("unsupported encoding mode: {0}")]
    UnsupportedMode(&'static str),

    /// Byte-mode payload was truncated or is not valid UTF-8.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
