//! Positioning a view on the canvas.
//!
//! The layout pass turns the nested [`Node`]s of a [`View`] into a flat list of
//! absolutely positioned [`Item`]s. Text is measured with the average glyph advance
//! of its font family and wrapped greedily at whitespace; words that do not fit on a
//! line of their own are broken between characters.

use crate::color::Rgb;
use crate::view::{Align, Block, Chips, Node, Row, Text, TextStyle, View};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The left edge.
    pub x: f32,
    /// The top edge.
    pub y: f32,
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

/// A positioned drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A filled, optionally rounded rectangle.
    Rect {
        /// Where the rectangle is.
        frame: Frame,
        /// The fill.
        fill: Rgb,
        /// The corner radius.
        radius: f32,
    },
    /// A single line of text.
    Text {
        /// The anchor position on the x axis.
        x: f32,
        /// The baseline position.
        baseline: f32,
        /// The content.
        content: String,
        /// The style.
        style: TextStyle,
        /// Which end of the line sits at `x`.
        anchor: Align,
    },
    /// An external image, scaled to cover its frame.
    Picture {
        /// Where the image is.
        frame: Frame,
        /// The image reference.
        href: String,
    },
}

/// A view with absolute positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The canvas width.
    pub width: f32,
    /// The canvas height.
    pub height: f32,
    /// The primitives, back to front.
    pub items: Vec<Item>,
}

impl Scene {
    /// Lay out a view.
    pub fn layout(view: &View) -> Self {
        let mut items = vec![];
        let height = place(&view.root, 0.0, 0.0, view.width, view.min_height, &mut items);

        Self {
            width: view.width,
            height: height.max(view.min_height).ceil(),
            items,
        }
    }
}

fn place(node: &Node, x: f32, y: f32, width: f32, min_height: f32, items: &mut Vec<Item>) -> f32 {
    match node {
        Node::Block(block) => place_block(block, x, y, width, min_height, items),
        Node::Row(row) => place_row(row, x, y, width, min_height, items),
        Node::Text(text) => place_text(text, x, y, width, items),
        Node::Chips(chips) => place_chips(chips, x, y, width, items),
        Node::Rule(rule) => {
            items.push(Item::Rect {
                frame: Frame {
                    x,
                    y,
                    width,
                    height: rule.thickness,
                },
                fill: rule.color,
                radius: 0.0,
            });
            rule.thickness
        }
        Node::Picture(picture) => {
            items.push(Item::Picture {
                frame: Frame {
                    x,
                    y,
                    width: picture.size,
                    height: picture.size,
                },
                href: picture.href.clone(),
            });
            picture.size
        }
    }
}

fn place_block(
    block: &Block,
    x: f32,
    y: f32,
    width: f32,
    min_height: f32,
    items: &mut Vec<Item>,
) -> f32 {
    let start = items.len();
    let padding = block.padding;
    let inner_x = x + padding.left;
    let inner_width = (width - padding.left - padding.right).max(0.0);

    let mut cursor = y + padding.top;
    for (index, child) in block.children.iter().enumerate() {
        if index > 0 {
            cursor += block.gap;
        }
        cursor += place(child, inner_x, cursor, inner_width, 0.0, items);
    }

    let height = (cursor + padding.bottom - y).max(min_height);

    // The background goes behind the children.
    if let Some(fill) = block.background {
        items.insert(
            start,
            Item::Rect {
                frame: Frame { x, y, width, height },
                fill,
                radius: 0.0,
            },
        );
    }

    height
}

fn place_row(row: &Row, x: f32, y: f32, width: f32, min_height: f32, items: &mut Vec<Item>) -> f32 {
    let total_weight: f32 = row.columns.iter().map(|column| column.weight).sum();
    if row.columns.is_empty() || total_weight <= 0.0 {
        return min_height;
    }

    let gaps = row.gap * (row.columns.len() - 1) as f32;
    let available = (width - gaps).max(0.0);
    let widths: Vec<f32> = row
        .columns
        .iter()
        .map(|column| available * column.weight / total_weight)
        .collect();

    // Measure first, so that every column can be stretched to the tallest one.
    let mut scratch = vec![];
    let mut height = min_height;
    for (column, &column_width) in row.columns.iter().zip(&widths) {
        scratch.clear();
        height = height.max(place(&column.node, 0.0, 0.0, column_width, 0.0, &mut scratch));
    }

    let mut cursor = x;
    for (column, &column_width) in row.columns.iter().zip(&widths) {
        place(&column.node, cursor, y, column_width, height, items);
        cursor += column_width + row.gap;
    }

    height
}

fn place_text(text: &Text, x: f32, y: f32, width: f32, items: &mut Vec<Item>) -> f32 {
    let style = text.style;
    let indent = if text.marker.is_some() {
        style.size * 1.2
    } else {
        0.0
    };
    let lines = wrap(&text.content, &style, width - indent);
    let line_height = style.line_height();
    let height = lines.len() as f32 * line_height;

    for (index, line) in lines.into_iter().enumerate() {
        let baseline = y + index as f32 * line_height + baseline_offset(&style);

        if index == 0 {
            if let Some(marker) = text.marker {
                items.push(Item::Text {
                    x,
                    baseline,
                    content: marker.to_string(),
                    style: style.aligned(Align::Start),
                    anchor: Align::Start,
                });
            }
        }

        let anchor_x = match style.align {
            Align::Start => x + indent,
            Align::Center => x + indent + (width - indent) / 2.0,
            Align::End => x + width,
        };

        items.push(Item::Text {
            x: anchor_x,
            baseline,
            content: line,
            style,
            anchor: style.align,
        });
    }

    height
}

fn place_chips(chips: &Chips, x: f32, y: f32, width: f32, items: &mut Vec<Item>) -> f32 {
    if chips.items.is_empty() {
        return 0.0;
    }

    let style = chips.style.aligned(Align::Start);
    let (pad_x, pad_y, gap_x) = if chips.fill.is_some() {
        (10.0, 4.0, 8.0)
    } else {
        (0.0, 0.0, 16.0)
    };
    let gap_y = 8.0;
    let chip_height = style.line_height() + 2.0 * pad_y;

    let mut cursor_x = x;
    let mut cursor_y = y;
    for label in &chips.items {
        let chip_width = (style.measure(label) + 2.0 * pad_x).min(width);
        if cursor_x > x && cursor_x + chip_width > x + width {
            cursor_x = x;
            cursor_y += chip_height + gap_y;
        }

        if let Some(fill) = chips.fill {
            items.push(Item::Rect {
                frame: Frame {
                    x: cursor_x,
                    y: cursor_y,
                    width: chip_width,
                    height: chip_height,
                },
                fill,
                radius: chip_height / 2.0,
            });
        }

        items.push(Item::Text {
            x: cursor_x + pad_x,
            baseline: cursor_y + pad_y + baseline_offset(&style),
            content: label.clone(),
            style,
            anchor: Align::Start,
        });

        cursor_x += chip_width + gap_x;
    }

    cursor_y + chip_height - y
}

fn baseline_offset(style: &TextStyle) -> f32 {
    (style.line_height() - style.size) / 2.0 + style.size * 0.8
}

/// Break `content` into lines no wider than `width`.
pub(crate) fn wrap(content: &str, style: &TextStyle, width: f32) -> Vec<String> {
    let mut lines = vec![];

    for paragraph in content.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };

            if style.measure(&candidate) <= width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if style.measure(word) <= width {
                line = word.to_string();
            } else {
                let mut pieces = break_word(word, style, width);
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

fn break_word(word: &str, style: &TextStyle, width: f32) -> Vec<String> {
    let mut pieces = vec![];
    let mut piece = String::new();

    for c in word.chars() {
        piece.push(c);
        if style.measure(&piece) > width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::template::{FontFamily, CATALOG};
    use crate::view::{Block, Insets, Role, CANVAS_MIN_HEIGHT, CANVAS_WIDTH};

    fn style() -> TextStyle {
        TextStyle {
            font: FontFamily::Serif,
            size: 12.0,
            bold: false,
            color: Rgb::black(),
            align: Align::Start,
        }
    }

    #[test]
    fn wrap_breaks_at_whitespace() {
        // Six glyphs per line.
        let lines = wrap("aaa bbb ccc", &style(), 37.0);
        assert_eq!(lines, vec!["aaa", "bbb", "ccc"]);

        let lines = wrap("aa bb cc", &style(), 37.0);
        assert_eq!(lines, vec!["aa bb", "cc"]);
    }

    #[test]
    fn wrap_breaks_long_words() {
        let lines = wrap("abcdefghij", &style(), 37.0);
        assert_eq!(lines, vec!["abcdef", "ghij"]);
    }

    #[test]
    fn wrap_keeps_explicit_line_breaks() {
        let lines = wrap("one\ntwo\n\nthree", &style(), 600.0);
        assert_eq!(lines, vec!["one", "two", "three"]);
        assert!(wrap("", &style(), 600.0).is_empty());
    }

    #[test]
    fn canvas_has_minimum_height() {
        let view = View {
            template: &CATALOG[0],
            width: CANVAS_WIDTH,
            min_height: CANVAS_MIN_HEIGHT,
            root: Block::new(Role::Plain).into(),
        };

        let scene = Scene::layout(&view);
        assert_approx_eq!(f32, scene.width, CANVAS_WIDTH);
        assert_approx_eq!(f32, scene.height, CANVAS_MIN_HEIGHT);
    }

    #[test]
    fn row_columns_are_stretched_to_the_tallest() {
        let short = Block::new(Role::Sidebar).background(Rgb::white());
        let tall = Block::new(Role::Main).padding(Insets::uniform(50.0));
        let row = Row::new(0.0).column(1.0, short).column(1.0, tall);

        let mut items = vec![];
        let height = place(&Node::Row(row), 0.0, 0.0, 200.0, 0.0, &mut items);

        assert_approx_eq!(f32, height, 100.0);
        match &items[0] {
            Item::Rect { frame, .. } => {
                assert_approx_eq!(f32, frame.width, 100.0);
                assert_approx_eq!(f32, frame.height, 100.0);
            }
            other => panic!("expected a rectangle, got {other:?}"),
        }
    }

    #[test]
    fn backgrounds_are_drawn_behind_children() {
        let block = Block::new(Role::Plain)
            .background(Rgb::white())
            .child(Text::new("hello", style()));

        let mut items = vec![];
        place(&Node::Block(block), 0.0, 0.0, 100.0, 0.0, &mut items);

        assert!(matches!(items[0], Item::Rect { .. }));
        assert!(matches!(items[1], Item::Text { .. }));
    }
}
