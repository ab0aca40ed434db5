use crate::decoder::bitstream::ZigzagReader;
use crate::decoder::format::FormatInfo;
use crate::decoder::modes::SegmentDecoder;
use crate::decoder::structure::StructureMap;
use crate::decoder::unmask::unmask;
/// Pipeline orchestration: pixel source in, decoded symbol out.
use crate::error::DecodeError;
use crate::models::{DecodedSymbol, ModuleMatrix, PixelSource, Version};
use tracing::debug;

/// Runs the fixed decode pipeline over a pre-cropped module grid.
pub struct SymbolDecoder;

impl SymbolDecoder {
    /// Decode one symbol.
    ///
    /// Stages run in a fixed order: materialize the grid, resolve the
    /// version, read format info, remove the mask, extract the bit stream,
    /// decode the segment. Any failure is terminal; no partial result is
    /// produced past the failing stage.
    pub fn decode<S: PixelSource + ?Sized>(source: &S) -> Result<DecodedSymbol, DecodeError> {
        let mut matrix = ModuleMatrix::from_source(source)?;
        let dimension = matrix.width();

        let version = Version::from_dimension(dimension)?;
        debug!(dimension, version = version.number(), "resolved version");

        // Format info lives in fixed cells and is independent of masking.
        let format = FormatInfo::read(&matrix)?;
        debug!(
            ec_level = %format.ec_level.letter(),
            mask = format.mask_pattern.id(),
            "decoded format info"
        );

        let structure = StructureMap::new(dimension);
        unmask(&mut matrix, format.mask_pattern, &structure);

        let bits = ZigzagReader::read(&matrix, &structure);
        debug!(bit_count = bits.len(), "extracted bit stream");

        let segment = SegmentDecoder::decode(&matrix, &bits)?;
        debug!(mode = segment.mode.name(), chars = segment.char_count, "decoded segment");

        Ok(DecodedSymbol {
            version,
            ec_level: format.ec_level,
            mask_pattern: format.mask_pattern,
            mode: segment.mode,
            bytes: segment.bytes,
            text: segment.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_source_fails() {
        let source = ModuleMatrix::new(21, 25);
        assert_eq!(
            SymbolDecoder::decode(&source),
            Err(DecodeError::NotSquare {
                width: 21,
                height: 25
            })
        );
    }

    #[test]
    fn test_bad_dimension_fails() {
        let source = ModuleMatrix::new(22, 22);
        assert_eq!(
            SymbolDecoder::decode(&source),
            Err(DecodeError::InvalidDimension(22))
        );
    }

    #[test]
    fn test_version_7_fails() {
        let source = ModuleMatrix::new(45, 45);
        assert_eq!(
            SymbolDecoder::decode(&source),
            Err(DecodeError::VersionNotImplemented(7))
        );
    }
}
