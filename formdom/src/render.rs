//! Plain-text projection of an element tree.
//!
//! Columns stack their children vertically, rows join their children on a
//! single line. Headings are underlined to their display width, inputs are
//! shown in brackets and buttons in angle brackets.

use crate::element::{Content, Direction, Element, Kind};
use crate::text::{display_width, pad_to_width};

/// Width that labels are padded to when they share a row with an input.
const LABEL_WIDTH: usize = 12;

pub fn to_text(root: &Element) -> String {
    let mut lines = Vec::new();
    render_block(root, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_block(element: &Element, lines: &mut Vec<String>) {
    match (&element.kind, &element.content) {
        (Kind::Heading(level), Content::Text(text)) => {
            let rule = if *level == 1 { '=' } else { '-' };
            lines.push(text.clone());
            lines.push(rule.to_string().repeat(display_width(text)));
        }
        (_, Content::Children(children)) if element.direction == Direction::Row => {
            lines.push(render_inline(children));
        }
        (_, Content::Children(children)) => {
            for child in children {
                render_block(child, lines);
            }
        }
        (_, Content::None) => {}
        _ => lines.push(render_leaf(element)),
    }
}

fn render_inline(children: &[Element]) -> String {
    let mut parts = Vec::with_capacity(children.len());
    for child in children {
        match (&child.kind, &child.content) {
            (Kind::Label { .. }, Content::Text(text)) => {
                parts.push(pad_to_width(text, LABEL_WIDTH));
            }
            (_, Content::Children(nested)) => parts.push(render_inline(nested)),
            (_, Content::None) => {}
            _ => parts.push(render_leaf(child)),
        }
    }
    parts.join(" ")
}

fn render_leaf(element: &Element) -> String {
    match (&element.kind, &element.content) {
        (Kind::Button, Content::Text(text)) => format!("< {text} >"),
        (_, Content::Input { value, placeholder }) => {
            match (value.is_empty(), placeholder) {
                (true, Some(placeholder)) => format!("[{placeholder}]"),
                _ => format!("[{value}]"),
            }
        }
        (_, Content::Text(text)) => text.clone(),
        _ => String::new(),
    }
}
