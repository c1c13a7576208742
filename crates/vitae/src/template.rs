//! The static template catalog.
//!
//! Six variants are available. Each one picks a layout strategy, a typography and a
//! color scheme; none of them changes which fields of the document are shown.

use crate::color::Rgb;

/// How the content of a template is arranged on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// One column, top to bottom.
    SingleFlow {
        /// Whether the header is centered.
        centered: bool,
    },
    /// A full-width header followed by two columns.
    TwoColumn {
        /// Whether the header is a filled accent band instead of accent text.
        banded: bool,
    },
    /// A narrow colored sidebar next to the main column.
    Sidebar {
        /// Which side the sidebar is on.
        side: Side,
    },
}

/// A horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left side.
    Left,
    /// The right side.
    Right,
}

/// The font family a template is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A sans-serif face.
    Sans,
    /// A serif face.
    Serif,
}

impl FontFamily {
    /// The CSS font family list used in the SVG output.
    pub fn css(self) -> &'static str {
        match self {
            FontFamily::Sans => "Helvetica, Arial, 'DejaVu Sans', sans-serif",
            FontFamily::Serif => "Georgia, 'Times New Roman', 'DejaVu Serif', serif",
        }
    }

    /// The average advance of a glyph, in em.
    pub(crate) fn average_advance(self) -> f32 {
        match self {
            FontFamily::Sans => 0.53,
            FontFamily::Serif => 0.5,
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateVariant {
    /// The identifier templates are selected by.
    pub id: &'static str,
    /// The human-readable name.
    pub name: &'static str,
    /// A short description shown in the selection grid.
    pub description: &'static str,
    /// The accent color.
    pub accent_color: Rgb,
    /// A teaser line shown on the preview card.
    pub preview_text: &'static str,
    pub(crate) layout: LayoutKind,
    pub(crate) font: FontFamily,
}

impl TemplateVariant {
    /// The layout strategy of the variant.
    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// The font family of the variant.
    pub fn font(&self) -> FontFamily {
        self.font
    }

    /// Look up a variant by identifier.
    ///
    /// Unknown identifiers resolve to the first variant of the catalog.
    pub fn resolve(id: &str) -> &'static TemplateVariant {
        Self::find(id).unwrap_or_else(|| {
            tracing::warn!(id, fallback = CATALOG[0].id, "unknown template");
            &CATALOG[0]
        })
    }

    /// Look up a variant by identifier without falling back.
    pub fn find(id: &str) -> Option<&'static TemplateVariant> {
        CATALOG.iter().find(|variant| variant.id == id)
    }
}

/// All available templates, in display order. The first entry is the default.
pub static CATALOG: [TemplateVariant; 6] = [
    TemplateVariant {
        id: "modern",
        name: "Modern",
        description: "Clean two-column layout under a bold colored header.",
        accent_color: Rgb::from_hex(0x2563eb),
        preview_text: "Contemporary and eye-catching",
        layout: LayoutKind::TwoColumn { banded: true },
        font: FontFamily::Sans,
    },
    TemplateVariant {
        id: "classic",
        name: "Classic",
        description: "Traditional single-column serif layout with a centered header.",
        accent_color: Rgb::from_hex(0x1f2937),
        preview_text: "Timeless and professional",
        layout: LayoutKind::SingleFlow { centered: true },
        font: FontFamily::Serif,
    },
    TemplateVariant {
        id: "creative",
        name: "Creative",
        description: "Colored sidebar with contact details and skills.",
        accent_color: Rgb::from_hex(0xdb2777),
        preview_text: "Stand out from the crowd",
        layout: LayoutKind::Sidebar { side: Side::Left },
        font: FontFamily::Sans,
    },
    TemplateVariant {
        id: "minimal",
        name: "Minimal",
        description: "Lots of white space and restrained typography.",
        accent_color: Rgb::from_hex(0x111827),
        preview_text: "Less is more",
        layout: LayoutKind::SingleFlow { centered: false },
        font: FontFamily::Sans,
    },
    TemplateVariant {
        id: "professional",
        name: "Professional",
        description: "Structured layout with a sidebar on the right.",
        accent_color: Rgb::from_hex(0x0f766e),
        preview_text: "Polished and corporate",
        layout: LayoutKind::Sidebar { side: Side::Right },
        font: FontFamily::Sans,
    },
    TemplateVariant {
        id: "executive",
        name: "Executive",
        description: "Elegant serif two-column layout under a ruled header.",
        accent_color: Rgb::from_hex(0x7c2d12),
        preview_text: "Refined and authoritative",
        layout: LayoutKind::TwoColumn { banded: false },
        font: FontFamily::Serif,
    },
];
