/// Read access to a binarized pixel grid.
///
/// Supplied by an external image-loading/thresholding collaborator. The
/// decoder only ever asks for dimensions and per-coordinate dark/light
/// values; it never opens files or thresholds colors itself.
pub trait PixelSource {
    /// Grid width in pixels (one pixel per module for a clean grid).
    fn width(&self) -> usize;

    /// Grid height in pixels.
    fn height(&self) -> usize;

    /// Whether the pixel at (x, y) is dark. Coordinates are in bounds.
    fn is_dark(&self, x: usize, y: usize) -> bool;
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        (**self).is_dark(x, y)
    }
}
