//! Page geometry.
//!
//! Pages are always as wide as the configured page width (A4 width by default).
//! Their height follows from the aspect ratio of the bitmap they show, so the image
//! is never distorted.

use crate::raster::Bitmap;

/// The height of an A4 page relative to its width.
pub const A4_ASPECT: f32 = 297.0 / 210.0;

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// The orientation of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Not taller than wide.
    Landscape,
}

impl Orientation {
    /// The orientation of an image with the given dimensions.
    pub fn of(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// The size of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// The width in millimeters.
    pub width_mm: f32,
    /// The height in millimeters.
    pub height_mm: f32,
    /// The orientation.
    pub orientation: Orientation,
}

impl PageGeometry {
    /// The page a bitmap is shown on, `width_mm` wide.
    pub fn for_bitmap(bitmap: &Bitmap, width_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm: bitmap.height() as f32 * width_mm / bitmap.width() as f32,
            orientation: Orientation::of(bitmap.width(), bitmap.height()),
        }
    }

    /// The width in PDF points.
    pub fn width_pt(&self) -> f32 {
        self.width_mm * POINTS_PER_MM
    }

    /// The height in PDF points.
    pub fn height_pt(&self) -> f32 {
        self.height_mm * POINTS_PER_MM
    }
}

/// The height of an A4-proportioned strip of a bitmap, in pixels.
pub(crate) fn a4_strip_height(bitmap: &Bitmap) -> u32 {
    ((bitmap.width() as f32 * A4_ASPECT).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use vitae::Rgb;

    use super::*;

    #[test]
    fn orientation_follows_the_aspect_ratio() {
        assert_eq!(Orientation::of(100, 200), Orientation::Portrait);
        assert_eq!(Orientation::of(200, 100), Orientation::Landscape);
        assert_eq!(Orientation::of(100, 100), Orientation::Landscape);
    }

    #[test]
    fn page_height_keeps_the_aspect_ratio() {
        let bitmap = Bitmap::filled(1588, 2246, Rgb::white()).unwrap();
        let page = PageGeometry::for_bitmap(&bitmap, 210.0);

        assert_approx_eq!(f32, page.width_mm, 210.0);
        assert_approx_eq!(f32, page.height_mm, 2246.0 * 210.0 / 1588.0);
        assert_eq!(page.orientation, Orientation::Portrait);
        assert_approx_eq!(f32, page.width_pt(), 595.2756, epsilon = 0.001);
    }

    #[test]
    fn a4_strips() {
        let bitmap = Bitmap::filled(210, 10, Rgb::white()).unwrap();
        assert_eq!(a4_strip_height(&bitmap), 297);
    }
}
