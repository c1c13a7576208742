//! Layout strategies.
//!
//! Every template is composed by one of three strategies: [`SingleFlow`],
//! [`TwoColumn`] or [`Sidebar`]. All of them consume the same [`Content`], which is
//! where the rules for what is visible live. Strategies only decide placement and
//! styling through the [`Theme`] of the variant.

mod blocks;
mod columns;
mod sidebar;
mod single;

pub use columns::TwoColumn;
pub use sidebar::Sidebar;
pub use single::SingleFlow;

use crate::color::Rgb;
use crate::model::{EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument};
use crate::section::SectionEntry;
use crate::template::{FontFamily, LayoutKind, TemplateVariant};
use crate::view::{Align, Node, TextStyle};

/// The parts of a document that are shown, shared by all templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Content<'a> {
    /// The personal info.
    pub personal: &'a PersonalInfo,
    /// Education entries with a degree.
    pub education: Vec<&'a EducationEntry>,
    /// Experience entries with a role.
    pub experience: Vec<&'a ExperienceEntry>,
    /// Non-empty skills.
    pub skills: Vec<&'a str>,
    /// Projects with a name.
    pub projects: Vec<&'a ProjectEntry>,
}

impl<'a> Content<'a> {
    /// Select the visible content of a document.
    pub fn select(doc: &'a ResumeDocument) -> Self {
        Self {
            personal: doc.personal(),
            education: visible(doc.education()),
            experience: visible(doc.experience()),
            skills: doc
                .skills()
                .iter()
                .map(|skill| skill.as_str())
                .filter(|skill| !skill.is_empty())
                .collect(),
            projects: visible(doc.projects()),
        }
    }

    /// The non-empty contact details, in display order.
    pub fn contacts(&self) -> Vec<&'a str> {
        [
            self.personal.email.as_str(),
            self.personal.phone.as_str(),
            self.personal.location.as_str(),
        ]
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect()
    }

    /// The portrait, if one is set.
    pub fn photo(&self) -> Option<&'a str> {
        self.personal.photo.as_deref().filter(|photo| !photo.is_empty())
    }
}

fn visible<E: SectionEntry>(entries: &[E]) -> Vec<&E> {
    entries.iter().filter(|entry| entry.is_visible()).collect()
}

/// Colors and type sizes of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// The font family.
    pub font: FontFamily,
    /// The accent color.
    pub accent: Rgb,
    /// The color of body text.
    pub ink: Rgb,
    /// The color of secondary text.
    pub muted: Rgb,
    /// The body font size.
    pub body_size: f32,
    /// The section heading font size.
    pub heading_size: f32,
    /// The font size of the owner's name.
    pub name_size: f32,
}

impl Theme {
    /// The theme of a catalog variant.
    pub fn for_variant(variant: &TemplateVariant) -> Self {
        let (body_size, heading_size, name_size) = match variant.font() {
            FontFamily::Serif => (14.0, 17.0, 34.0),
            FontFamily::Sans => (13.0, 16.0, 32.0),
        };

        Self {
            font: variant.font(),
            accent: variant.accent_color,
            ink: Rgb::from_hex(0x1f2937),
            muted: Rgb::from_hex(0x6b7280),
            body_size,
            heading_size,
            name_size,
        }
    }

    /// Regular body text.
    pub fn body(&self) -> TextStyle {
        TextStyle {
            font: self.font,
            size: self.body_size,
            bold: false,
            color: self.ink,
            align: Align::Start,
        }
    }

    /// Bold body text.
    pub fn strong(&self) -> TextStyle {
        TextStyle {
            bold: true,
            ..self.body()
        }
    }

    /// Secondary text.
    pub fn muted(&self) -> TextStyle {
        TextStyle {
            size: self.body_size - 1.0,
            color: self.muted,
            ..self.body()
        }
    }

    /// Section headings.
    pub fn heading(&self) -> TextStyle {
        TextStyle {
            size: self.heading_size,
            bold: true,
            color: self.accent,
            ..self.body()
        }
    }

    /// The owner's name.
    pub fn name(&self) -> TextStyle {
        TextStyle {
            size: self.name_size,
            bold: true,
            color: self.ink,
            ..self.body()
        }
    }
}

/// A way of arranging content on the canvas.
pub trait Layout {
    /// Build the root node of the view.
    fn compose(&self, content: &Content<'_>, theme: &Theme) -> Node;
}

/// Compose the root node for a variant with the strategy it names.
pub fn compose(variant: &TemplateVariant, content: &Content<'_>) -> Node {
    let theme = Theme::for_variant(variant);
    match variant.layout() {
        LayoutKind::SingleFlow { centered } => SingleFlow { centered }.compose(content, &theme),
        LayoutKind::TwoColumn { banded } => TwoColumn { banded }.compose(content, &theme),
        LayoutKind::Sidebar { side } => Sidebar { side }.compose(content, &theme),
    }
}
