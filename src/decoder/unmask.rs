/// Mask removal.
use crate::decoder::structure::StructureMap;
use crate::models::{MaskPattern, ModuleMatrix};

/// XOR the mask pattern out of every data-eligible module.
///
/// The operation is its own inverse, so the same call applies and removes a
/// mask. The matrix is mutated in place; structural modules are never
/// touched.
pub fn unmask(matrix: &mut ModuleMatrix, pattern: MaskPattern, structure: &StructureMap) {
    let dimension = structure.dimension();
    for y in 0..dimension {
        for x in 0..dimension {
            if structure.is_data(x, y) && pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}
