//! Rasterizing rendered views.
//!
//! The default [`ResvgRasterizer`] parses the SVG of a [`RenderedView`] with usvg and
//! draws it with resvg into a tiny-skia pixmap that was filled with the background
//! color first. Text is shaped with the fonts installed on the system, which are
//! loaded once per process.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tiny_skia::{Pixmap, Transform};
use usvg::fontdb;
use usvg::{ImageHrefResolver, Options, Tree};
use vitae::{RenderedView, Rgb};

use crate::error::{ExportError, ExportResult};
use crate::settings::RasterOptions;

static SYSTEM_FONTS: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
});

/// An opaque 8-bit RGB bitmap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from tightly packed RGB8 rows.
    ///
    /// Returns `None` if a dimension is zero or if the length of the data does not
    /// match the dimensions.
    pub fn from_rgb8(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        (width > 0 && height > 0 && data.len() == len).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Create a bitmap filled with one color.
    ///
    /// Returns `None` if a dimension is zero.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Option<Self> {
        let pixel = [color.red(), color.green(), color.blue()];
        let data = pixel.repeat(width as usize * height as usize);
        Self::from_rgb8(data, width, height)
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGB8 samples, row by row.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * 3;
        let sample = &self.data[offset..offset + 3];
        Some(Rgb::new(sample[0], sample[1], sample[2]))
    }

    /// Copy the rows `top..top + height` into a new bitmap, padding rows past the
    /// bottom with `background`.
    pub(crate) fn strip(&self, top: u32, height: u32, background: Rgb) -> Option<Bitmap> {
        let mut strip = Bitmap::filled(self.width, height, background)?;
        let row_len = self.width as usize * 3;
        let rows = height.min(self.height.saturating_sub(top)) as usize;
        if rows == 0 {
            return Some(strip);
        }

        let start = top as usize * row_len;
        strip.data[..rows * row_len].copy_from_slice(&self.data[start..start + rows * row_len]);
        Some(strip)
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitmap {{ {}x{} }}", self.width, self.height)
    }
}

/// Something that can turn a rendered view into pixels.
pub trait Rasterizer: Send + Sync {
    /// Rasterize a view.
    fn rasterize(&self, view: &RenderedView, options: &RasterOptions) -> ExportResult<Bitmap>;
}

/// A rasterizer based on resvg.
#[derive(Debug, Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::with_fonts(SYSTEM_FONTS.clone())
    }
}

impl ResvgRasterizer {
    /// Create a rasterizer that uses the system fonts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rasterizer with a custom font database.
    pub fn with_fonts(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    fn options(&self, allow_cross_origin: bool) -> Options<'static> {
        let mut options = Options {
            fontdb: self.fontdb.clone(),
            ..Options::default()
        };

        if !allow_cross_origin {
            options.image_href_resolver = ImageHrefResolver {
                resolve_data: ImageHrefResolver::default_data_resolver(),
                resolve_string: Box::new(|href: &str, _: &Options| {
                    tracing::debug!(href, "skipping external image");
                    None
                }),
            };
        }

        options
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, view: &RenderedView, options: &RasterOptions) -> ExportResult<Bitmap> {
        if !(options.scale.is_finite() && options.scale > 0.0) {
            return Err(ExportError::Rasterization(format!(
                "invalid scale {}",
                options.scale
            )));
        }

        let tree = Tree::from_str(view.svg(), &self.options(options.allow_cross_origin))
            .map_err(|err| ExportError::Rasterization(err.to_string()))?;

        let size = tree.size();
        let width = (size.width() * options.scale).round() as u32;
        let height = (size.height() * options.scale).round() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ExportError::Rasterization(format!("cannot allocate a {width}x{height} pixmap"))
        })?;

        let background = options.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.red(),
            background.green(),
            background.blue(),
            255,
        ));

        resvg::render(
            &tree,
            Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );

        // The pixmap is opaque, so the alpha channel can be dropped.
        let data = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue()]
            })
            .collect::<Vec<_>>();

        tracing::debug!(width, height, "rasterized view");

        Bitmap::from_rgb8(data, width, height)
            .ok_or_else(|| ExportError::Rasterization("empty bitmap".to_string()))
    }
}
