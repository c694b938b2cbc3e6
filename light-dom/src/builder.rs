//! Tree construction from classified lines
//!
//! Every input line becomes `wrapper(text)` under a single root container, in input order.
//! Where wrapper descriptors come from is the one variation point, expressed by
//! [`DescriptorSource`]:
//!
//! - `DescriptorRegistry`: interned, one shared descriptor per distinct attribute set.
//! - [`FreshDescriptors`]: a new unshared descriptor for every element, counted.
//!
//! Both produce trees that render byte-for-byte the same.

use crate::descriptor::{Descriptor, DescriptorParams};
use crate::node::{ElementNode, Node};
use crate::registry::DescriptorRegistry;
use std::cell::Cell;
use std::sync::Arc;

/// The kind of element a line is wrapped in, as decided by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Heading,
    Subheading,
    Quote,
    Paragraph,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Heading,
        ElementKind::Subheading,
        ElementKind::Quote,
        ElementKind::Paragraph,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Heading => "h1",
            ElementKind::Subheading => "h2",
            ElementKind::Quote => "blockquote",
            ElementKind::Paragraph => "p",
        }
    }

    /// Descriptor request for the wrapper of a line of this kind.
    pub fn params(self) -> DescriptorParams {
        DescriptorParams::paired_block(self.tag())
    }
}

/// A raw line paired with the kind its classifier picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub kind: ElementKind,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, kind: ElementKind) -> Self {
        ClassifiedLine {
            text: text.into(),
            kind,
        }
    }
}

/// Where a builder gets descriptors from
pub trait DescriptorSource {
    fn descriptor(&self, params: &DescriptorParams) -> Arc<Descriptor>;
}

impl DescriptorSource for DescriptorRegistry {
    fn descriptor(&self, params: &DescriptorParams) -> Arc<Descriptor> {
        self.intern_params(params)
    }
}

/// Non-interned mode: allocates a fresh descriptor on every request.
///
/// Keeps a count of allocations so it can be compared against a registry's size.
#[derive(Debug, Default)]
pub struct FreshDescriptors {
    allocated: Cell<usize>,
}

impl FreshDescriptors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of descriptors handed out so far
    pub fn allocated(&self) -> usize {
        self.allocated.get()
    }
}

impl DescriptorSource for FreshDescriptors {
    fn descriptor(&self, params: &DescriptorParams) -> Arc<Descriptor> {
        self.allocated.set(self.allocated.get() + 1);
        Arc::new(Descriptor::from(params.key()))
    }
}

/// Build a root container holding one wrapped text node per line, in input order
///
/// An empty `lines` slice yields a root with no children.
pub fn build_tree<S>(source: &S, root: &DescriptorParams, lines: &[ClassifiedLine]) -> ElementNode
where
    S: DescriptorSource + ?Sized,
{
    let mut tree = ElementNode::new(source.descriptor(root));

    for line in lines {
        let wrapper = ElementNode::new(source.descriptor(&line.kind.params()))
            .with_child(Node::text(line.text.as_str()));
        tree.append_child(wrapper);
    }

    tracing::debug!(
        root = %root.tag,
        children = tree.child_count(),
        "built document tree"
    );
    tree
}

/// Build a list container with one item element per entry
///
/// `build_list(&registry, &ul.with_classes(["nav-list"]), &li, ["Home", "About"])`
/// gives `<ul class="nav-list"><li>Home</li><li>About</li></ul>`.
pub fn build_list<S, I, T>(
    source: &S,
    list: &DescriptorParams,
    item: &DescriptorParams,
    items: I,
) -> ElementNode
where
    S: DescriptorSource + ?Sized,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut container = ElementNode::new(source.descriptor(list));
    for entry in items {
        container.append_child(ElementNode::new(source.descriptor(item)).with_child(Node::text(entry)));
    }
    container
}
