//! Building blocks shared by all layout strategies.

use crate::color::Rgb;
use crate::layout::{Content, Theme};
use crate::section::Section;
use crate::view::{
    Align, Block, ChipKind, Chips, Insets, Node, Picture, Role, Row, Rule, Text, TextStyle,
};

/// How section headings are drawn.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Heading {
    pub style: TextStyle,
    pub rule: Option<Rule>,
    pub uppercase: bool,
}

impl Heading {
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            rule: None,
            uppercase: false,
        }
    }

    pub fn ruled(mut self, color: Rgb) -> Self {
        self.rule = Some(Rule {
            color,
            thickness: 1.5,
        });
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

/// The name followed by the contact details.
pub(crate) fn header(
    content: &Content<'_>,
    name: TextStyle,
    contact: TextStyle,
    separator: &str,
) -> Block {
    let contacts = content.contacts().join(separator);

    Block::new(Role::Header)
        .gap(6.0)
        .child_opt(non_empty(&content.personal.name, name))
        .child_opt(non_empty(&contacts, contact))
}

/// The summary paragraph, if there is one.
pub(crate) fn summary(content: &Content<'_>, style: TextStyle) -> Option<Node> {
    let text = non_empty(content.personal.summary.trim(), style)?;
    Some(Block::new(Role::Summary).child(text).into())
}

/// A section with its heading, or `None` if it has no entries.
pub(crate) fn section(section: Section, heading: Heading, entries: Vec<Node>) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }

    let title = if heading.uppercase {
        section.title().to_uppercase()
    } else {
        section.title().to_string()
    };

    let block = Block::new(Role::Section(section))
        .gap(10.0)
        .child(Text::new(title, heading.style))
        .child_opt(heading.rule)
        .children(entries);

    Some(block.into())
}

/// One block per visible education entry.
pub(crate) fn education(content: &Content<'_>, theme: &Theme) -> Vec<Node> {
    content
        .education
        .iter()
        .map(|entry| {
            let mut details = vec![];
            if !entry.year.is_empty() {
                details.push(entry.year.clone());
            }
            if let Some(gpa) = entry.gpa.as_deref().filter(|gpa| !gpa.is_empty()) {
                details.push(format!("GPA: {gpa}"));
            }

            let block = Block::new(Role::Entry(Section::Education))
                .gap(2.0)
                .child(Text::new(&entry.degree, theme.strong()))
                .child_opt(non_empty(&entry.institution, theme.body()))
                .child_opt(non_empty(&details.join(" • "), theme.muted()));
            Node::from(block)
        })
        .collect()
}

/// One block per visible experience entry.
pub(crate) fn experience(content: &Content<'_>, theme: &Theme) -> Vec<Node> {
    content
        .experience
        .iter()
        .map(|entry| {
            let title = title_row(&entry.role, &entry.duration, theme);
            let company = non_empty(&entry.company, theme.body().colored(theme.accent));
            let bullets = entry
                .bullets()
                .map(|line| Node::from(Text::bullet(line, theme.body())));

            let block = Block::new(Role::Entry(Section::Experience))
                .gap(3.0)
                .child(title)
                .child_opt(company)
                .children(bullets);
            Node::from(block)
        })
        .collect()
}

/// One block per visible project.
pub(crate) fn projects(content: &Content<'_>, theme: &Theme, chip_fill: Option<Rgb>) -> Vec<Node> {
    content
        .projects
        .iter()
        .map(|entry| {
            let technologies: Vec<String> = entry.technologies().map(str::to_string).collect();
            let technologies = (!technologies.is_empty()).then(|| Chips {
                kind: ChipKind::Technologies,
                items: technologies,
                style: theme.muted(),
                fill: chip_fill,
            });

            let block = Block::new(Role::Entry(Section::Projects))
                .gap(4.0)
                .child(Text::new(&entry.name, theme.strong()))
                .child_opt(non_empty(&entry.description, theme.body()))
                .child_opt(technologies);
            Node::from(block)
        })
        .collect()
}

/// The skill tags as the only entry of the skills section.
pub(crate) fn skills(content: &Content<'_>, style: TextStyle, fill: Option<Rgb>) -> Vec<Node> {
    if content.skills.is_empty() {
        return vec![];
    }

    vec![Node::from(Chips {
        kind: ChipKind::Skills,
        items: content.skills.iter().map(|skill| skill.to_string()).collect(),
        style,
        fill,
    })]
}

/// The portrait, if one is set.
pub(crate) fn photo(content: &Content<'_>, size: f32) -> Option<Node> {
    content.photo().map(|href| {
        Node::from(Picture {
            href: href.to_string(),
            size,
        })
    })
}

/// A padded container without a role.
pub(crate) fn padded(padding: Insets, gap: f32, children: Vec<Node>) -> Block {
    Block::new(Role::Plain).padding(padding).gap(gap).children(children)
}

fn title_row(title: &str, aside: &str, theme: &Theme) -> Node {
    if aside.is_empty() {
        return Text::new(title, theme.strong()).into();
    }

    Row::new(12.0)
        .column(3.0, Text::new(title, theme.strong()))
        .column(1.0, Text::new(aside, theme.muted().aligned(Align::End)))
        .into()
}

fn non_empty(text: &str, style: TextStyle) -> Option<Text> {
    (!text.is_empty()).then(|| Text::new(text, style))
}
