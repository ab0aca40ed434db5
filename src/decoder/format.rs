/// Format information extraction.
use crate::error::DecodeError;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix};

/// XOR mask applied to the raw format bits by the standard.
const FORMAT_XOR_MASK: u8 = 0b10101;

/// Decoded format information: error correction level and mask pattern.
///
/// Read from a single fixed probe strip (row 8, columns 0-4) rather than the
/// full redundant 15-bit field; no BCH check is performed, so corrupted
/// format bits are not detected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level.
    pub ec_level: ECLevel,
    /// Data mask pattern id.
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Read and unmask the 5-bit format field from the probe strip.
    pub fn read(matrix: &ModuleMatrix) -> Result<Self, DecodeError> {
        let mut value = 0u8;
        for col in 0..5 {
            // MSB first; a dark module contributes a 1.
            value = (value << 1) | matrix.get(col, 8) as u8;
        }
        Self::from_raw(value)
    }

    /// Decode a raw (pre-XOR) 5-bit format value.
    pub fn from_raw(raw: u8) -> Result<Self, DecodeError> {
        let value = raw ^ FORMAT_XOR_MASK;
        let mask_id = value & 0b111;
        let ec_bits = (value >> 3) & 0b11;

        // Unreachable for a 3-bit field, asserted anyway per the contract.
        let mask_pattern =
            MaskPattern::from_bits(mask_id).ok_or(DecodeError::FormatInfoOutOfRange(mask_id))?;

        Ok(Self {
            ec_level: ECLevel::from_format_bits(ec_bits),
            mask_pattern,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_light_strip() {
        // Five light modules read as 0b00000; XOR gives 0b10101:
        // ec bits 10 -> H, mask id 101 -> pattern 5.
        let matrix = ModuleMatrix::new(21, 21);
        let info = FormatInfo::read(&matrix).unwrap();
        assert_eq!(info.ec_level, ECLevel::H);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern5);
    }

    #[test]
    fn test_strip_cancels_xor_mask() {
        // Dark-light-dark-light-dark reads as 0b10101, cancelling the XOR
        // mask: ec bits 00 -> M, mask id 0.
        let mut matrix = ModuleMatrix::new(21, 21);
        matrix.set(0, 8, true);
        matrix.set(2, 8, true);
        matrix.set(4, 8, true);
        let info = FormatInfo::read(&matrix).unwrap();
        assert_eq!(info.ec_level, ECLevel::M);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern0);
    }

    #[test]
    fn test_all_32_raw_values() {
        for raw in 0u8..32 {
            let info = FormatInfo::from_raw(raw).unwrap();
            let value = raw ^ FORMAT_XOR_MASK;
            assert_eq!(info.mask_pattern.id(), value & 0b111);
            assert_eq!(
                info.ec_level,
                ECLevel::from_format_bits((value >> 3) & 0b11)
            );
        }
    }
}
