use crate::error::DecodeError;

/// QR symbol version (1-40), derived solely from the module dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(u8);

impl Version {
    /// Resolve the version from a square grid dimension.
    ///
    /// Only versions 1-6 are decodable by this crate; larger symbols add
    /// alignment patterns and a redundant format scheme that the structural
    /// classifier does not model.
    pub fn from_dimension(dimension: usize) -> Result<Self, DecodeError> {
        if dimension < 17 || (dimension - 17) % 4 != 0 {
            return Err(DecodeError::InvalidDimension(dimension));
        }
        let version = (dimension - 17) / 4;
        if !(1..=40).contains(&version) {
            return Err(DecodeError::UnsupportedVersion(version));
        }
        if version >= 7 {
            return Err(DecodeError::VersionNotImplemented(version as u8));
        }
        Ok(Self(version as u8))
    }

    /// The version number (1-6 once resolved).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Symbol size in modules (width = height).
    pub fn size(self) -> usize {
        17 + 4 * self.0 as usize
    }
}

/// Error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Map the two unmasked format bits to a level (00=M, 01=L, 10=H, 11=Q).
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ECLevel::M,
            1 => ECLevel::L,
            2 => ECLevel::H,
            _ => ECLevel::Q,
        }
    }

    /// Single-letter name as printed in format reports.
    pub fn letter(self) -> char {
        match self {
            ECLevel::L => 'L',
            ECLevel::M => 'M',
            ECLevel::Q => 'Q',
            ECLevel::H => 'H',
        }
    }
}

/// Data mask pattern (0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (row + col) % 2 == 0
    Pattern0,
    /// row % 2 == 0
    Pattern1,
    /// col % 3 == 0
    Pattern2,
    /// (row + col) % 3 == 0
    Pattern3,
    /// (row/2 + col/3) % 2 == 0
    Pattern4,
    /// (row*col)%2 + (row*col)%3 == 0
    Pattern5,
    /// ((row*col)%2 + (row*col)%3) % 2 == 0
    Pattern6,
    /// ((row+col)%2 + (row*col)%3) % 2 == 0
    Pattern7,
}

impl MaskPattern {
    /// Select a pattern from a 3-bit id.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// The pattern id (0-7).
    pub fn id(self) -> u8 {
        match self {
            MaskPattern::Pattern0 => 0,
            MaskPattern::Pattern1 => 1,
            MaskPattern::Pattern2 => 2,
            MaskPattern::Pattern3 => 3,
            MaskPattern::Pattern4 => 4,
            MaskPattern::Pattern5 => 5,
            MaskPattern::Pattern6 => 6,
            MaskPattern::Pattern7 => 7,
        }
    }

    /// Whether the module at (row, col) is flipped by this pattern.
    pub fn is_masked(self, row: usize, col: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (row + col) % 2 == 0,
            MaskPattern::Pattern1 => row % 2 == 0,
            MaskPattern::Pattern2 => col % 3 == 0,
            MaskPattern::Pattern3 => (row + col) % 3 == 0,
            MaskPattern::Pattern4 => (row / 2 + col / 3) % 2 == 0,
            MaskPattern::Pattern5 => (row * col) % 2 + (row * col) % 3 == 0,
            MaskPattern::Pattern6 => ((row * col) % 2 + (row * col) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((row + col) % 2 + (row * col) % 3) % 2 == 0,
        }
    }

    /// Human-readable mask equation for reports.
    pub fn equation(self) -> &'static str {
        match self {
            MaskPattern::Pattern0 => "(row + column) mod 2 == 0",
            MaskPattern::Pattern1 => "(row) mod 2 == 0",
            MaskPattern::Pattern2 => "(column) mod 3 == 0",
            MaskPattern::Pattern3 => "(row + column) mod 3 == 0",
            MaskPattern::Pattern4 => "(floor(row / 2) + floor(column / 3)) mod 2 == 0",
            MaskPattern::Pattern5 => "((row * column) mod 2) + ((row * column) mod 3) == 0",
            MaskPattern::Pattern6 => "(((row * column) mod 2) + ((row * column) mod 3)) mod 2 == 0",
            MaskPattern::Pattern7 => "(((row + column) mod 2) + ((row * column) mod 3)) mod 2 == 0",
        }
    }
}

/// Payload encoding mode, from the 4-bit mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 0000 - end of data
    Terminator,
    /// 0001 - digits 0-9
    Numeric,
    /// 0010 - digits, uppercase letters and a few symbols
    Alphanumeric,
    /// 0011 - multi-symbol chaining
    StructuredAppend,
    /// 0100 - 8-bit data, decoded as UTF-8
    Byte,
    /// 0101 - extended channel interpretation
    Eci,
    /// 1000 - Shift-JIS Kanji
    Kanji,
    /// 1001 - FNC1 (GS1 applications)
    Fnc1,
    /// Any other indicator value
    Reserved(u8),
}

impl Mode {
    /// Map a 4-bit mode indicator to its meaning.
    pub fn from_indicator(bits: u8) -> Self {
        match bits & 0b1111 {
            0b0000 => Mode::Terminator,
            0b0001 => Mode::Numeric,
            0b0010 => Mode::Alphanumeric,
            0b0011 => Mode::StructuredAppend,
            0b0100 => Mode::Byte,
            0b0101 => Mode::Eci,
            0b1000 => Mode::Kanji,
            0b1001 => Mode::Fnc1,
            other => Mode::Reserved(other),
        }
    }

    /// Mode name used in reports and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Terminator => "terminator",
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::StructuredAppend => "structured-append",
            Mode::Byte => "byte",
            Mode::Eci => "eci",
            Mode::Kanji => "kanji",
            Mode::Fnc1 => "fnc1",
            Mode::Reserved(_) => "reserved",
        }
    }

    /// Width of the character-count indicator, for modes that carry one.
    pub fn char_count_bits(self) -> Option<usize> {
        match self {
            Mode::Numeric => Some(10),
            Mode::Alphanumeric => Some(9),
            Mode::Byte => Some(8),
            Mode::Kanji => Some(8),
            _ => None,
        }
    }
}

/// Fully decoded symbol, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Symbol version (1-6).
    pub version: Version,
    /// Error correction level from the format info.
    pub ec_level: ECLevel,
    /// Mask pattern that was removed before reading data.
    pub mask_pattern: MaskPattern,
    /// Payload encoding mode.
    pub mode: Mode,
    /// Raw payload bytes.
    pub bytes: Vec<u8>,
    /// Payload decoded as UTF-8 text.
    pub text: String,
}

impl DecodedSymbol {
    /// Payload bytes as a lowercase hex string.
    pub fn payload_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
