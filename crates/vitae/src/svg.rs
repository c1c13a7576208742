//! Writing a scene as a standalone SVG document.

use std::fmt::{self, Write};

use crate::scene::{Item, Scene};
use crate::view::Align;

/// Serialize a scene.
///
/// The document has no page background, so whoever draws it decides what is
/// behind the content.
pub fn to_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_scene(&mut svg, scene);
    svg
}

fn write_scene(svg: &mut String, scene: &Scene) -> fmt::Result {
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(scene.width),
        h = num(scene.height),
    )?;

    for item in &scene.items {
        write_item(svg, item)?;
    }

    writeln!(svg, "</svg>")
}

fn write_item(svg: &mut String, item: &Item) -> fmt::Result {
    match item {
        Item::Rect {
            frame,
            fill,
            radius,
        } => {
            write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                num(frame.x),
                num(frame.y),
                num(frame.width),
                num(frame.height),
                fill,
            )?;
            if *radius > 0.0 {
                write!(svg, r#" rx="{}""#, num(*radius))?;
            }
            writeln!(svg, "/>")
        }
        Item::Text {
            x,
            baseline,
            content,
            style,
            anchor,
        } => {
            let anchor = match anchor {
                Align::Start => "start",
                Align::Center => "middle",
                Align::End => "end",
            };

            writeln!(
                svg,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}" xml:space="preserve">{}</text>"#,
                num(*x),
                num(*baseline),
                escape(style.font.css()),
                num(style.size),
                if style.bold { "bold" } else { "normal" },
                style.color,
                anchor,
                escape(content),
            )
        }
        Item::Picture { frame, href } => writeln!(
            svg,
            r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" xlink:href="{}"/>"#,
            num(frame.x),
            num(frame.y),
            num(frame.width),
            num(frame.height),
            escape(href),
        ),
    }
}

/// Format a coordinate with at most two decimals.
fn num(value: f32) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escape text for use in XML content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
