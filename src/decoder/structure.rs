use crate::models::ModuleMatrix;

/// Whether (x, y) in an n×n grid is a structural module.
///
/// Structural modules (finder corners, timing rows, the bottom-right
/// alignment footprint on versions 2+, the fixed dark module) never carry
/// data and are never masked. Everything else is data-eligible. Masking and
/// traversal must agree on this classification, so both go through here.
pub fn is_structural(dimension: usize, x: usize, y: usize) -> bool {
    let n = dimension;

    // Finder pattern corner blocks (top-left, top-right, bottom-left).
    if (x <= 8 && y <= 8) || (n - x <= 8 && y <= 8) || (x <= 8 && n - y <= 8) {
        return true;
    }

    // Timing patterns.
    if x == 6 || y == 6 {
        return true;
    }

    // Alignment pattern footprint near the bottom-right corner; version 1
    // (21x21) has none.
    if n != 21 && (5..=9).contains(&(n - x)) && (5..=9).contains(&(n - y)) {
        return true;
    }

    // Fixed dark module.
    x == 8 && y == n - 8
}

/// Memoized structural classification for one symbol.
///
/// The predicate depends only on (dimension, x, y), so the whole grid is
/// precomputed once and shared by the mask engine and the bitstream reader.
pub struct StructureMap {
    map: ModuleMatrix,
}

impl StructureMap {
    /// Classify every coordinate of an n×n symbol.
    pub fn new(dimension: usize) -> Self {
        let mut map = ModuleMatrix::new(dimension, dimension);
        for y in 0..dimension {
            for x in 0..dimension {
                map.set(x, y, is_structural(dimension, x, y));
            }
        }
        Self { map }
    }

    /// Symbol dimension this map was built for.
    pub fn dimension(&self) -> usize {
        self.map.width()
    }

    /// Whether (x, y) is structural.
    pub fn is_structural(&self, x: usize, y: usize) -> bool {
        self.map.get(x, y)
    }

    /// Whether (x, y) may carry data.
    pub fn is_data(&self, x: usize, y: usize) -> bool {
        !self.map.get(x, y)
    }

    /// Number of data-eligible modules in the symbol.
    pub fn data_module_count(&self) -> usize {
        let n = self.map.width();
        n * n - self.map.dark_count()
    }
}
