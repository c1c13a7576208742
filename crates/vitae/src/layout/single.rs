use crate::color::Rgb;
use crate::layout::blocks::{self, Heading};
use crate::layout::{Content, Layout, Theme};
use crate::section::Section;
use crate::view::{Align, Block, Insets, Node, Role, Rule};

/// Everything in one column, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct SingleFlow {
    /// Whether the header is centered and followed by a rule.
    pub centered: bool,
}

impl Layout for SingleFlow {
    fn compose(&self, content: &Content<'_>, theme: &Theme) -> Node {
        let align = if self.centered {
            Align::Center
        } else {
            Align::Start
        };

        let header = blocks::header(
            content,
            theme.name().aligned(align),
            theme.muted().aligned(align),
            "  |  ",
        );

        let (heading, skill_fill) = if self.centered {
            let heading = Heading::new(theme.heading().colored(theme.ink))
                .ruled(theme.ink.tint(0.7))
                .uppercase();
            (heading, None)
        } else {
            let heading = Heading::new(theme.heading().colored(theme.muted)).uppercase();
            (heading, Some(Rgb::from_hex(0xf3f4f6)))
        };

        let rule = self.centered.then_some(Rule {
            color: theme.accent,
            thickness: 2.0,
        });

        let root = Block::new(Role::Plain)
            .padding(Insets::symmetric(48.0, 56.0))
            .gap(22.0)
            .child(header)
            .child_opt(rule)
            .child_opt(blocks::summary(content, theme.body()))
            .child_opt(blocks::section(
                Section::Experience,
                heading,
                blocks::experience(content, theme),
            ))
            .child_opt(blocks::section(
                Section::Education,
                heading,
                blocks::education(content, theme),
            ))
            .child_opt(blocks::section(
                Section::Projects,
                heading,
                blocks::projects(content, theme, skill_fill),
            ))
            .child_opt(blocks::section(
                Section::Skills,
                heading,
                blocks::skills(content, theme.body(), skill_fill),
            ));

        root.into()
    }
}
