//! Core data structures for the light document tree.

use crate::descriptor::Descriptor;
use std::sync::Arc;

/// A node in the document tree: either a text leaf or an element container.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
}

/// Immutable text payload. Rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

/// Per-occurrence element: a handle to a shared descriptor plus an owned child list.
///
/// Children can only be appended; there is no removal or reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    descriptor: Arc<Descriptor>,
    children: Vec<Node>,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        TextNode { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ElementNode {
    pub fn new(descriptor: Arc<Descriptor>) -> Self {
        ElementNode {
            descriptor,
            children: Vec::new(),
        }
    }

    /// Append a child at the end of the child list.
    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`ElementNode::append_child`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    pub fn descriptor(&self) -> &Arc<Descriptor> {
        &self.descriptor
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::new(text))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text.text()),
            Node::Element(_) => None,
        }
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}
