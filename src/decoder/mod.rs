//! The decode pipeline, in dependency order:
//! structural classification, format info, mask removal, zig-zag bitstream
//! extraction, and segment decoding, orchestrated by [`SymbolDecoder`].

/// Zig-zag bitstream extraction
pub mod bitstream;
/// Format information (EC level + mask pattern id)
pub mod format;
/// Payload segment decoding (byte/UTF-8 only)
pub mod modes;
/// Structural vs data-eligible module classification
pub mod structure;
/// Pipeline orchestrator
pub mod symbol_decoder;
/// Mask removal (self-inverse XOR pass)
pub mod unmask;

pub use symbol_decoder::SymbolDecoder;
