//! Interned vs. fresh construction, side by side.
//!
//! Builds the same classified input twice, once through a brand-new registry and once with
//! fresh descriptors, and records the counts a caller would want to print or compare.

use crate::builder::{build_tree, ClassifiedLine, FreshDescriptors};
use crate::descriptor::DescriptorParams;
use crate::registry::DescriptorRegistry;
use crate::serializer::render_element;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterningReport {
    /// Input lines
    pub lines: usize,
    /// Children under the root (one per line)
    pub root_children: usize,
    /// Distinct descriptors in the registry after the interned build
    pub interned_descriptors: usize,
    /// Descriptors allocated by the non-interned build (root included)
    pub fresh_descriptors: usize,
    /// Both builds rendered to the same bytes
    pub outputs_match: bool,
    /// Tag names held by the registry, sorted
    pub tags: Vec<String>,
}

impl InterningReport {
    pub fn compare(root: &DescriptorParams, lines: &[ClassifiedLine]) -> Self {
        let registry = DescriptorRegistry::new();
        let interned = build_tree(&registry, root, lines);

        let fresh = FreshDescriptors::new();
        let unshared = build_tree(&fresh, root, lines);

        let outputs_match = render_element(&interned) == render_element(&unshared);
        if !outputs_match {
            tracing::warn!("interned and fresh trees rendered differently");
        }

        InterningReport {
            lines: lines.len(),
            root_children: interned.child_count(),
            interned_descriptors: registry.len(),
            fresh_descriptors: fresh.allocated(),
            outputs_match,
            tags: registry.tags(),
        }
    }

    /// Descriptors avoided by interning
    pub fn saved(&self) -> usize {
        self.fresh_descriptors.saturating_sub(self.interned_descriptors)
    }
}
