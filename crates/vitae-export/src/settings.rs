//! Settings that control rasterization and encoding.

use vitae::Rgb;

/// How the rasterized bitmap is distributed over pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pagination {
    /// One page as tall as the bitmap, at the configured page width.
    #[default]
    SinglePage,
    /// The bitmap is cut into A4-proportioned strips, one per page. The last
    /// strip is padded with the background color.
    A4Pages,
}

/// Settings that should be applied when exporting a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// The oversampling factor of the rasterization. A view that is 794 pixels wide
    /// is rasterized into a bitmap that is `794 * scale` pixels wide.
    pub scale: f32,
    /// The color behind the content. The bitmap is always opaque, regardless of the
    /// colors a template uses.
    pub background: Rgb,
    /// Whether external image assets, like the portrait, are loaded. When disabled,
    /// only images embedded as `data:` URLs are drawn.
    pub allow_cross_origin: bool,
    /// The width of the pages in millimeters. The page height follows from the aspect
    /// ratio of the bitmap.
    pub page_width_mm: f32,
    /// How the bitmap is distributed over pages.
    pub pagination: Pagination,
    /// Whether to write a document info dictionary with the title of the résumé.
    pub metadata: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: Rgb::white(),
            allow_cross_origin: true,
            page_width_mm: 210.0,
            pagination: Pagination::SinglePage,
            metadata: true,
        }
    }
}

impl ExportSettings {
    /// The options passed to the rasterizer.
    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            scale: self.scale,
            background: self.background,
            allow_cross_origin: self.allow_cross_origin,
        }
    }

    /// The options passed to the PDF encoder, for a résumé owned by `owner`.
    pub fn encode_options(&self, owner: &str) -> EncodeOptions {
        let owner = owner.trim();
        let title = if owner.is_empty() {
            "Resume".to_string()
        } else {
            format!("{owner} Resume")
        };

        EncodeOptions {
            page_width_mm: self.page_width_mm,
            pagination: self.pagination,
            background: self.background,
            title: self.metadata.then_some(title),
            ..EncodeOptions::default()
        }
    }
}

/// Options for [`Rasterizer::rasterize`](crate::Rasterizer::rasterize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// The oversampling factor.
    pub scale: f32,
    /// The opaque background color.
    pub background: Rgb,
    /// Whether external image references are resolved.
    pub allow_cross_origin: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        ExportSettings::default().raster_options()
    }
}

/// Options for [`encode_pdf`](crate::encode_pdf).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOptions {
    /// The page width in millimeters.
    pub page_width_mm: f32,
    /// How the bitmap is distributed over pages.
    pub pagination: Pagination,
    /// The color the last page is padded with when paginating.
    pub background: Rgb,
    /// The document title. No document info dictionary is written if this is `None`.
    pub title: Option<String>,
    /// The deflate level of the image data, between 0 and 10.
    pub compression_level: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            pagination: Pagination::SinglePage,
            background: Rgb::white(),
            title: None,
            compression_level: 10,
        }
    }
}
