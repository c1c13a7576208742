use crate::color::Rgb;
use crate::layout::blocks::{self, Heading};
use crate::layout::{Content, Layout, Theme};
use crate::section::Section;
use crate::template::Side;
use crate::view::{Block, Insets, Node, Role, Row};

const SIDEBAR_WEIGHT: f32 = 1.0;
const MAIN_WEIGHT: f32 = 2.2;

/// A colored sidebar with contact details, education and skills next to the main
/// column.
#[derive(Debug, Clone, Copy)]
pub struct Sidebar {
    /// Which side the sidebar is on.
    pub side: Side,
}

impl Layout for Sidebar {
    fn compose(&self, content: &Content<'_>, theme: &Theme) -> Node {
        // Everything on the accent background is set in white.
        let inverted = Theme {
            accent: Rgb::white(),
            ink: Rgb::white(),
            muted: theme.accent.tint(0.75),
            ..*theme
        };
        let side_heading = Heading::new(inverted.heading()).uppercase();

        let header = blocks::header(content, inverted.name(), inverted.muted(), "\n");

        let sidebar = Block::new(Role::Sidebar)
            .background(theme.accent)
            .padding(Insets::symmetric(40.0, 28.0))
            .gap(26.0)
            .child_opt(blocks::photo(content, 132.0))
            .child(header)
            .child_opt(blocks::section(
                Section::Skills,
                side_heading,
                blocks::skills(
                    content,
                    theme.body().colored(theme.accent),
                    Some(theme.accent.tint(0.85)),
                ),
            ))
            .child_opt(blocks::section(
                Section::Education,
                side_heading,
                blocks::education(content, &inverted),
            ));

        let heading = Heading::new(theme.heading()).ruled(theme.accent.tint(0.7));

        let main = Block::new(Role::Main)
            .padding(Insets::symmetric(40.0, 36.0))
            .gap(24.0)
            .child_opt(blocks::summary(content, theme.body()))
            .child_opt(blocks::section(
                Section::Experience,
                heading,
                blocks::experience(content, theme),
            ))
            .child_opt(blocks::section(
                Section::Projects,
                heading,
                blocks::projects(content, theme, Some(theme.accent.tint(0.88))),
            ));

        let row = match self.side {
            Side::Left => Row::new(0.0)
                .column(SIDEBAR_WEIGHT, sidebar)
                .column(MAIN_WEIGHT, main),
            Side::Right => Row::new(0.0)
                .column(MAIN_WEIGHT, main)
                .column(SIDEBAR_WEIGHT, sidebar),
        };

        row.into()
    }
}
