//! The visual document tree produced by the template renderer.
//!
//! A [`View`] describes what is shown and how it is styled, but not where: positions
//! are computed later by the [`scene`](crate::scene) module. Blocks carry a [`Role`],
//! which allows asking a view what it displays without looking at the pixels.

use crate::color::Rgb;
use crate::section::Section;
use crate::template::{FontFamily, TemplateVariant};

/// What a block of the view represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A purely presentational container.
    Plain,
    /// The name and contact block.
    Header,
    /// The summary paragraph.
    Summary,
    /// A whole section, including its heading.
    Section(Section),
    /// One entry of a section.
    Entry(Section),
    /// The sidebar column of sidebar layouts.
    Sidebar,
    /// The main column.
    Main,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Align to the left edge.
    #[default]
    Start,
    /// Center.
    Center,
    /// Align to the right edge.
    End,
}

/// How a run of text looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// The font family.
    pub font: FontFamily,
    /// The font size in pixels.
    pub size: f32,
    /// Whether the text is bold.
    pub bold: bool,
    /// The text color.
    pub color: Rgb,
    /// The alignment within the available width.
    pub align: Align,
}

impl TextStyle {
    /// Change the alignment.
    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Change the color.
    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// The height of one line.
    pub fn line_height(&self) -> f32 {
        self.size * 1.4
    }

    /// The approximate width of `text` when set in this style.
    pub fn measure(&self, text: &str) -> f32 {
        let advance = self.size * self.font.average_advance();
        let advance = if self.bold { advance * 1.06 } else { advance };
        text.chars().count() as f32 * advance
    }
}

/// Space inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Space above the content.
    pub top: f32,
    /// Space to the right of the content.
    pub right: f32,
    /// Space below the content.
    pub bottom: f32,
    /// Space to the left of the content.
    pub left: f32,
}

impl Insets {
    /// The same inset on all sides.
    pub fn uniform(value: f32) -> Self {
        Self::symmetric(value, value)
    }

    /// One inset for top and bottom, one for left and right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// A vertical stack of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// What the block represents.
    pub role: Role,
    /// The children, top to bottom.
    pub children: Vec<Node>,
    /// Vertical space between children.
    pub gap: f32,
    /// Space around the children.
    pub padding: Insets,
    /// The background fill.
    pub background: Option<Rgb>,
}

impl Block {
    /// Create an empty block.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            children: vec![],
            gap: 0.0,
            padding: Insets::default(),
            background: None,
        }
    }

    /// Set the gap between children.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the background.
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Append a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child if there is one.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    /// Append several children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

/// One column of a [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The share of the row width this column receives.
    pub weight: f32,
    /// The content.
    pub node: Node,
}

/// Nodes placed side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The columns, left to right.
    pub columns: Vec<Column>,
    /// Horizontal space between columns.
    pub gap: f32,
}

impl Row {
    /// Create an empty row.
    pub fn new(gap: f32) -> Self {
        Self {
            columns: vec![],
            gap,
        }
    }

    /// Append a column.
    pub fn column(mut self, weight: f32, node: impl Into<Node>) -> Self {
        self.columns.push(Column {
            weight,
            node: node.into(),
        });
        self
    }
}

/// A paragraph of text, wrapped to the available width.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The content.
    pub content: String,
    /// The style.
    pub style: TextStyle,
    /// A marker drawn in front of the first line, like a bullet.
    pub marker: Option<&'static str>,
}

impl Text {
    /// Create a paragraph.
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            marker: None,
        }
    }

    /// Create a bulleted paragraph.
    pub fn bullet(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            marker: Some("•"),
        }
    }
}

/// What a list of chips shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipKind {
    /// Skill tags.
    Skills,
    /// Technologies of a project.
    Technologies,
}

/// A flowing list of short labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Chips {
    /// What the labels are.
    pub kind: ChipKind,
    /// The labels, in order.
    pub items: Vec<String>,
    /// The label style.
    pub style: TextStyle,
    /// The pill fill. Without one, labels are set as plain text.
    pub fill: Option<Rgb>,
}

/// A horizontal line across the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// The line color.
    pub color: Rgb,
    /// The thickness in pixels.
    pub thickness: f32,
}

/// An external picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// A path, URL or `data:` URL.
    pub href: String,
    /// The edge length of the square box the picture is fit into.
    pub size: f32,
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A vertical stack.
    Block(Block),
    /// Side-by-side columns.
    Row(Row),
    /// A paragraph.
    Text(Text),
    /// A list of labels.
    Chips(Chips),
    /// A horizontal line.
    Rule(Rule),
    /// An image.
    Picture(Picture),
}

impl From<Block> for Node {
    fn from(value: Block) -> Self {
        Node::Block(value)
    }
}

impl From<Row> for Node {
    fn from(value: Row) -> Self {
        Node::Row(value)
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

impl From<Chips> for Node {
    fn from(value: Chips) -> Self {
        Node::Chips(value)
    }
}

impl From<Rule> for Node {
    fn from(value: Rule) -> Self {
        Node::Rule(value)
    }
}

impl From<Picture> for Node {
    fn from(value: Picture) -> Self {
        Node::Picture(value)
    }
}

impl Node {
    /// Visit this node and all its descendants, depth first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        match self {
            Node::Block(block) => block.children.iter().for_each(|child| child.walk(f)),
            Node::Row(row) => row.columns.iter().for_each(|column| column.node.walk(f)),
            _ => {}
        }
    }
}

/// The width of the canvas, A4 at 96 dpi.
pub const CANVAS_WIDTH: f32 = 794.0;
/// The minimum height of the canvas, A4 at 96 dpi.
pub const CANVAS_MIN_HEIGHT: f32 = 1123.0;

/// A rendered résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// The template the view was rendered with.
    pub template: &'static TemplateVariant,
    /// The width of the canvas.
    pub width: f32,
    /// The minimum height of the canvas.
    pub min_height: f32,
    /// The root node.
    pub root: Node,
}

impl View {
    /// Count the blocks with the given role.
    pub fn count(&self, role: Role) -> usize {
        let mut count = 0;
        self.root.walk(&mut |node| {
            if matches!(node, Node::Block(block) if block.role == role) {
                count += 1;
            }
        });
        count
    }

    /// The number of visible entries of a section.
    pub fn entries(&self, section: Section) -> usize {
        self.count(Role::Entry(section))
    }

    /// Whether a section (with its heading) is shown.
    pub fn has_section(&self, section: Section) -> bool {
        self.count(Role::Section(section)) > 0
    }

    /// The skill tags, in display order.
    pub fn skill_tags(&self) -> Vec<&str> {
        let mut tags = vec![];
        self.root.walk(&mut |node| {
            if let Node::Chips(chips) = node {
                if chips.kind == ChipKind::Skills {
                    tags.extend(chips.items.iter().map(String::as_str));
                }
            }
        });
        tags
    }

    /// The references of all pictures, in tree order.
    pub fn pictures(&self) -> Vec<&str> {
        let mut pictures = vec![];
        self.root.walk(&mut |node| {
            if let Node::Picture(picture) = node {
                pictures.push(picture.href.as_str());
            }
        });
        pictures
    }

    /// All text content, in tree order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = vec![];
        self.root.walk(&mut |node| match node {
            Node::Text(text) => texts.push(text.content.as_str()),
            Node::Chips(chips) => texts.extend(chips.items.iter().map(String::as_str)),
            _ => {}
        });
        texts
    }
}
