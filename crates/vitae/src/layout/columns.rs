use crate::color::Rgb;
use crate::layout::blocks::{self, Heading};
use crate::layout::{Content, Layout, Theme};
use crate::section::Section;
use crate::view::{Block, Insets, Node, Role, Row, Rule};

/// A full-width header above a wide main column and a narrow side column.
#[derive(Debug, Clone, Copy)]
pub struct TwoColumn {
    /// Whether the header is set on a filled accent band.
    pub banded: bool,
}

impl Layout for TwoColumn {
    fn compose(&self, content: &Content<'_>, theme: &Theme) -> Node {
        let header = if self.banded {
            let header = blocks::header(
                content,
                theme.name().colored(Rgb::white()),
                theme.muted().colored(theme.accent.tint(0.8)),
                "  •  ",
            );

            blocks::padded(Insets::symmetric(36.0, 48.0), 0.0, vec![header.into()])
                .background(theme.accent)
        } else {
            let header = blocks::header(
                content,
                theme.name().colored(theme.accent),
                theme.muted(),
                "  •  ",
            );
            let rule = Rule {
                color: theme.accent,
                thickness: 3.0,
            };

            blocks::padded(
                Insets {
                    top: 40.0,
                    right: 48.0,
                    bottom: 0.0,
                    left: 48.0,
                },
                14.0,
                vec![header.into(), rule.into()],
            )
        };

        let heading = Heading::new(theme.heading()).ruled(theme.accent.tint(0.75));
        let chip_fill = Some(theme.accent.tint(0.88));

        let main = Block::new(Role::Main)
            .gap(22.0)
            .child_opt(blocks::summary(content, theme.body()))
            .child_opt(blocks::section(
                Section::Experience,
                heading,
                blocks::experience(content, theme),
            ))
            .child_opt(blocks::section(
                Section::Projects,
                heading,
                blocks::projects(content, theme, chip_fill),
            ));

        let side = Block::new(Role::Sidebar)
            .gap(22.0)
            .child_opt(blocks::section(
                Section::Education,
                heading,
                blocks::education(content, theme),
            ))
            .child_opt(blocks::section(
                Section::Skills,
                heading,
                blocks::skills(content, theme.body(), chip_fill),
            ));

        let body = Row::new(32.0).column(2.0, main).column(1.0, side);

        Block::new(Role::Plain)
            .gap(28.0)
            .child(header)
            .child(blocks::padded(
                Insets {
                    top: 0.0,
                    right: 48.0,
                    bottom: 40.0,
                    left: 48.0,
                },
                0.0,
                vec![body.into()],
            ))
            .into()
    }
}
