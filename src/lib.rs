//! qrprobe - a teaching-oriented QR symbol decoder
//!
//! Decodes a pre-cropped, axis-aligned QR-style matrix symbol by reasoning
//! directly over its module grid: format information, mask removal, zig-zag
//! bitstream traversal and segment decoding are all done by hand, with no
//! third-party QR library. Aimed at understanding QR internals rather than
//! production scanning.
//!
//! Scope limits, by design:
//! - versions 1-6 only (no alignment-pattern grid, no redundant format field);
//! - byte/UTF-8 payloads only; every other mode fails with
//!   [`DecodeError::UnsupportedMode`];
//! - no Reed-Solomon correction: raw bits are extracted, not repaired;
//! - the mode indicator is read from the bottom-right 2x2 corner cells, a
//!   documented divergence from the canonical stream-head read (the two agree
//!   on well-formed symbols).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Decode pipeline (structure, format, unmask, bitstream, segments)
pub mod decoder;
/// Error taxonomy
pub mod error;
/// Core data structures (ModuleMatrix, Version, MaskPattern, ...)
pub mod models;
/// CLI collaborator helpers (image loading, thresholding, trimming)
pub mod tools;

pub use decoder::SymbolDecoder;
pub use error::DecodeError;
pub use models::{DecodedSymbol, ECLevel, MaskPattern, Mode, ModuleMatrix, PixelSource, Version};

/// Decode one symbol from a binarized pixel source.
///
/// # Example
/// ```
/// use qrprobe::{Mode, ModuleMatrix};
///
/// // An all-light 21x21 grid decodes as an empty terminator segment.
/// let grid = ModuleMatrix::new(21, 21);
/// let symbol = qrprobe::decode(&grid).unwrap();
/// assert_eq!(symbol.mode, Mode::Terminator);
/// assert!(symbol.text.is_empty());
/// ```
pub fn decode<S: PixelSource + ?Sized>(source: &S) -> Result<DecodedSymbol, DecodeError> {
    SymbolDecoder::decode(source)
}
