/// Bitstream extraction via the canonical zig-zag traversal.
use crate::decoder::structure::StructureMap;
use crate::models::ModuleMatrix;

/// Walks the data region in the standard up/down snake order.
pub struct ZigzagReader;

impl ZigzagReader {
    /// The full traversal order: every data-eligible coordinate exactly once.
    ///
    /// Strips are two columns wide, visited right to left. Within a row the
    /// right cell is read before the left one; strips alternate upward and
    /// downward, starting upward at the bottom-right corner. The timing
    /// column at x == 6 is skipped whole, shifting every strip left of it by
    /// one.
    pub fn coordinates(structure: &StructureMap) -> Vec<(usize, usize)> {
        let dimension = structure.dimension();
        let mut coords = Vec::with_capacity(structure.data_module_count());

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            let rows: Box<dyn Iterator<Item = usize>> = if upward {
                Box::new((0..dimension).rev())
            } else {
                Box::new(0..dimension)
            };
            for row in rows {
                for x in [col, col - 1] {
                    if x >= 0 && structure.is_data(x as usize, row) {
                        coords.push((x as usize, row));
                    }
                }
            }

            upward = !upward;
            col -= 2;
        }

        coords
    }

    /// Extract the ordered bit sequence from an unmasked matrix.
    pub fn read(matrix: &ModuleMatrix, structure: &StructureMap) -> Vec<bool> {
        Self::coordinates(structure)
            .into_iter()
            .map(|(x, y)| matrix.get(x, y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_bottom_right_corner() {
        let structure = StructureMap::new(21);
        let coords = ZigzagReader::coordinates(&structure);
        assert_eq!(coords[0], (20, 20));
        assert_eq!(coords[1], (19, 20));
        assert_eq!(coords[2], (20, 19));
        assert_eq!(coords[3], (19, 19));
    }

    #[test]
    fn test_visits_every_data_module_once() {
        for dimension in [21, 25, 29] {
            let structure = StructureMap::new(dimension);
            let coords = ZigzagReader::coordinates(&structure);
            assert_eq!(coords.len(), structure.data_module_count());

            let mut seen = ModuleMatrix::new(dimension, dimension);
            for &(x, y) in &coords {
                assert!(structure.is_data(x, y), "visited structural ({x}, {y})");
                assert!(!seen.get(x, y), "visited ({x}, {y}) twice");
                seen.set(x, y, true);
            }
        }
    }

    #[test]
    fn test_read_follows_traversal_order() {
        let structure = StructureMap::new(21);
        let mut matrix = ModuleMatrix::new(21, 21);
        matrix.set(20, 20, true);
        matrix.set(20, 19, true);

        let bits = ZigzagReader::read(&matrix, &structure);
        assert!(bits[0]);
        assert!(!bits[1]);
        assert!(bits[2]);
        assert!(!bits[3]);
    }
}
