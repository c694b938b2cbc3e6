//! Shared element descriptors and a light document tree
//!
//!     This crate turns an ordered sequence of classified text lines into a small element tree
//!     and serializes that tree into markup. Elements do not carry their own tag, display mode,
//!     closing behavior and classes. Those live in an immutable [`Descriptor`], and equal
//!     descriptors are interned in a [`DescriptorRegistry`] so thousands of paragraphs share one.
//!
//!     This is a pure lib: no stdout, no env vars. The light-cli crate is the shell around it.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs        # DomError (input access only, the core itself is total)
//!     ├── descriptor.rs   # Descriptor, DescriptorKey, DescriptorParams, display/closing enums
//!     ├── registry.rs     # DescriptorRegistry: the interning cache
//!     ├── node.rs         # Node sum type: text leaves and element containers
//!     ├── builder.rs      # ClassifiedLine -> tree, interned or fresh descriptors
//!     ├── serializer.rs   # Node -> markup string
//!     ├── classify.rs     # line -> ElementKind heuristic
//!     ├── source.rs       # file -> right-trimmed lines
//!     └── report.rs       # interned vs fresh comparison for diagnostics
//!
//! Ownership
//!
//!     The registry holds one `Arc<Descriptor>` per distinct key for its whole lifetime. Element
//!     nodes hold clones of that handle and own only their child list. Dropping a tree never
//!     touches the registry, and the registry can serve any number of trees.
//!
//! Rendering
//!
//!     Text is written verbatim (no escaping). A self-closing element renders its opening tag
//!     only, so children appended to it never reach the output. Both are intentional and covered
//!     by tests; do not "fix" them without flagging the behavior change.
//!
pub mod builder;
pub mod classify;
pub mod descriptor;
pub mod error;
pub mod node;
pub mod registry;
pub mod report;
pub mod serializer;
pub mod source;

pub use builder::{
    build_list, build_tree, ClassifiedLine, DescriptorSource, ElementKind, FreshDescriptors,
};
pub use classify::{classify_lines, ClassifierRules};
pub use descriptor::{ClosingBehavior, Descriptor, DescriptorKey, DescriptorParams, DisplayMode};
pub use error::DomError;
pub use node::{ElementNode, Node, TextNode};
pub use registry::DescriptorRegistry;
pub use report::InterningReport;
pub use serializer::{inner_html, render, render_element};

/// Classifies raw lines, builds a tree under `root` using the registry and renders it.
///
/// This is the whole text-to-markup pipeline in interned mode.
pub fn lines_to_markup(
    registry: &DescriptorRegistry,
    root: &DescriptorParams,
    lines: &[String],
    rules: &ClassifierRules,
) -> String {
    let classified = classify_lines(lines, rules);
    let tree = build_tree(registry, root, &classified);
    render_element(&tree)
}
