//! External-collaborator helpers for the CLI: image loading, color
//! thresholding, quiet-zone trimming and pixels-per-module sampling.
//!
//! Nothing in here is part of the core decode pipeline; the core only ever
//! sees the resulting [`ModuleMatrix`] through the [`PixelSource`] trait.
//!
//! [`PixelSource`]: crate::models::PixelSource

use crate::models::ModuleMatrix;
use rayon::prelude::*;
use std::path::Path;

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Threshold RGB bytes into a dark/light matrix.
///
/// A pixel is dark when all three channels are below 128. Rows are
/// thresholded in parallel; the result depends only on per-pixel values, so
/// the parallelism is unobservable.
pub fn threshold_rgb(rgb: &[u8], width: usize, height: usize) -> ModuleMatrix {
    let mut flags = vec![0u8; width * height];
    flags.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, flag) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            let dark = rgb[idx] < 128 && rgb[idx + 1] < 128 && rgb[idx + 2] < 128;
            *flag = dark as u8;
        }
    });

    let mut matrix = ModuleMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if flags[y * width + x] == 1 {
                matrix.set(x, y, true);
            }
        }
    }
    matrix
}

/// Trim the light border down to the bounding box of all dark pixels.
///
/// Hands the core a grid that starts and ends on symbol pixels. An all-light
/// input is returned unchanged.
pub fn trim_quiet_zone(pixels: &ModuleMatrix) -> ModuleMatrix {
    let (width, height) = (pixels.width(), pixels.height());
    let mut bounds: Option<(usize, usize, usize, usize)> = None;

    for y in 0..height {
        for x in 0..width {
            if pixels.get(x, y) {
                bounds = Some(match bounds {
                    None => (x, x, y, y),
                    Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
                });
            }
        }
    }

    let Some((x0, x1, y0, y1)) = bounds else {
        return pixels.clone();
    };

    let mut trimmed = ModuleMatrix::new(x1 - x0 + 1, y1 - y0 + 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            trimmed.set(x - x0, y - y0, pixels.get(x, y));
        }
    }
    trimmed
}

/// Collapse a grid rendered at `module_px` pixels per module down to one
/// pixel per module by sampling each cell's center.
pub fn sample_modules(pixels: &ModuleMatrix, module_px: usize) -> ModuleMatrix {
    if module_px <= 1 {
        return pixels.clone();
    }
    let width = pixels.width() / module_px;
    let height = pixels.height() / module_px;
    let mut modules = ModuleMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let px = x * module_px + module_px / 2;
            let py = y * module_px + module_px / 2;
            modules.set(x, y, pixels.get(px, py));
        }
    }
    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_rule() {
        // One dark pixel, one bright, one mixed (not dark: green channel high).
        let rgb = [10u8, 20, 30, 200, 200, 200, 50, 180, 50];
        let matrix = threshold_rgb(&rgb, 3, 1);
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 0));
        assert!(!matrix.get(2, 0));
    }

    #[test]
    fn test_trim_quiet_zone() {
        let mut pixels = ModuleMatrix::new(10, 10);
        pixels.set(2, 3, true);
        pixels.set(7, 8, true);
        let trimmed = trim_quiet_zone(&pixels);
        assert_eq!(trimmed.width(), 6);
        assert_eq!(trimmed.height(), 6);
        assert!(trimmed.get(0, 0));
        assert!(trimmed.get(5, 5));
    }

    #[test]
    fn test_trim_all_light() {
        let pixels = ModuleMatrix::new(4, 4);
        assert_eq!(trim_quiet_zone(&pixels), pixels);
    }

    #[test]
    fn test_sample_modules() {
        // 2px-per-module rendering of a 2x2 checkerboard.
        let mut pixels = ModuleMatrix::new(4, 4);
        for y in 0..2 {
            for x in 0..2 {
                pixels.set(x, y, true);
                pixels.set(x + 2, y + 2, true);
            }
        }
        let modules = sample_modules(&pixels, 2);
        assert_eq!(modules.width(), 2);
        assert!(modules.get(0, 0));
        assert!(!modules.get(1, 0));
        assert!(!modules.get(0, 1));
        assert!(modules.get(1, 1));
    }
}
