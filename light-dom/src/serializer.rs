//! Markup serialization (Node → string)
//!
//! Walks the tree depth-first and writes every node into a single `fmt::Write` sink.
//! Text payloads are written as-is. Self-closing elements stop after the opening tag.

use crate::descriptor::{ClosingBehavior, Descriptor};
use crate::node::{ElementNode, Node};
use std::fmt::{self, Write};

/// Render a node to its markup string
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_markup(&mut out, node);
    out
}

/// Render an element, wrapping tag included
pub fn render_element(element: &ElementNode) -> String {
    let mut out = String::new();
    let _ = write_element(&mut out, element);
    out
}

/// Render only the children of an element, concatenated in order
///
/// This ignores the closing behavior: a self-closing element still yields its children here.
pub fn inner_html(element: &ElementNode) -> String {
    let mut out = String::new();
    let _ = write_children(&mut out, element);
    out
}

/// Write a node into any `fmt::Write` sink
pub fn write_markup<W: Write>(sink: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Text(text) => sink.write_str(text.text()),
        Node::Element(element) => write_element(sink, element),
    }
}

fn write_element<W: Write>(sink: &mut W, element: &ElementNode) -> fmt::Result {
    let descriptor = element.descriptor();
    write_open_tag(sink, descriptor)?;

    match descriptor.closing() {
        ClosingBehavior::SelfClosing => Ok(()),
        ClosingBehavior::Paired => {
            write_children(sink, element)?;
            write!(sink, "</{}>", descriptor.tag())
        }
    }
}

fn write_children<W: Write>(sink: &mut W, element: &ElementNode) -> fmt::Result {
    for child in element.children() {
        write_markup(sink, child)?;
    }
    Ok(())
}

fn write_open_tag<W: Write>(sink: &mut W, descriptor: &Descriptor) -> fmt::Result {
    write!(sink, "<{}", descriptor.tag())?;
    if !descriptor.classes().is_empty() {
        write!(sink, " class=\"{}\"", descriptor.classes().join(" "))?;
    }
    sink.write_char('>')
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_markup(f, self)
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}
