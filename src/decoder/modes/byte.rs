/// Byte mode (0100): 8 bits per character, decoded as UTF-8.
use crate::error::DecodeError;

/// Decoder for byte-mode payloads.
pub struct ByteDecoder;

impl ByteDecoder {
    /// Read `char_count` bytes (MSB first) and decode them as UTF-8.
    pub fn decode(bits: &[bool], char_count: usize) -> Result<(Vec<u8>, String), DecodeError> {
        if char_count * 8 > bits.len() {
            return Err(DecodeError::MalformedPayload(format!(
                "bit stream exhausted: {} bytes declared, {} bits available",
                char_count,
                bits.len()
            )));
        }

        let mut bytes = Vec::with_capacity(char_count);
        for chunk in bits[..char_count * 8].chunks(8) {
            let mut byte = 0u8;
            for &bit in chunk {
                byte = (byte << 1) | bit as u8;
            }
            bytes.push(byte);
        }

        let text = String::from_utf8(bytes.clone())
            .map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;
        Ok((bytes, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(bytes: &[u8]) -> Vec<bool> {
        bytes
            .iter()
            .flat_map(|&b| (0..8).rev().map(move |i| (b >> i) & 1 == 1))
            .collect()
    }

    #[test]
    fn test_byte_decode() {
        let bits = bits_of(b"HI");
        let (bytes, text) = ByteDecoder::decode(&bits, 2).unwrap();
        assert_eq!(bytes, b"HI");
        assert_eq!(text, "HI");
    }

    #[test]
    fn test_multibyte_utf8() {
        let bits = bits_of("héllo".as_bytes());
        let (_, text) = ByteDecoder::decode(&bits, "héllo".len()).unwrap();
        assert_eq!(text, "héllo");
    }

    #[test]
    fn test_truncated_stream() {
        let bits = bits_of(b"A");
        assert!(matches!(
            ByteDecoder::decode(&bits, 2),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let bits = bits_of(&[0xFF, 0xFE]);
        assert!(matches!(
            ByteDecoder::decode(&bits, 2),
            Err(DecodeError::MalformedPayload(_))
        ));
    }
}
