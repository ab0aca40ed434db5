pub mod matrix;
pub mod source;
pub mod symbol;

pub use matrix::ModuleMatrix;
pub use source::PixelSource;
pub use symbol::{DecodedSymbol, ECLevel, MaskPattern, Mode, Version};
