use crate::error::DecodeError;
use crate::models::source::PixelSource;

/// Compact bit-packed matrix of modules (true = dark, false = light).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create an all-light matrix with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height + 7) / 8;
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Materialize a pixel source into an owned matrix.
    ///
    /// The source must already be a clean, axis-aligned module grid;
    /// the only validation performed here is squareness.
    pub fn from_source<S: PixelSource + ?Sized>(source: &S) -> Result<Self, DecodeError> {
        let (width, height) = (source.width(), source.height());
        if width != height {
            return Err(DecodeError::NotSquare { width, height });
        }
        let mut matrix = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                matrix.set(x, y, source.is_dark(x, y));
            }
        }
        Ok(matrix)
    }

    /// Matrix width in modules.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height in modules.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get module at (x, y); out-of-bounds reads as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (x, y).
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Toggle module at (x, y).
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Count of dark modules.
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl PixelSource for ModuleMatrix {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_toggle() {
        let mut matrix = ModuleMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));

        matrix.toggle(3, 4);
        assert!(!matrix.get(3, 4));
        assert_eq!(matrix.dark_count(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = ModuleMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
    }

    #[test]
    fn test_from_source_rejects_rectangles() {
        let rect = ModuleMatrix::new(10, 12);
        assert_eq!(
            ModuleMatrix::from_source(&rect),
            Err(DecodeError::NotSquare {
                width: 10,
                height: 12
            })
        );
    }

    #[test]
    fn test_from_source_copies_modules() {
        let mut src = ModuleMatrix::new(5, 5);
        src.set(1, 2, true);
        src.set(4, 4, true);
        let copy = ModuleMatrix::from_source(&src).unwrap();
        assert_eq!(copy, src);
    }
}
