//! Descriptor registry for interning shared element state
//!
//! This module provides the cache that hands out one shared [`Descriptor`] per distinct
//! [`DescriptorKey`]. Entries are created lazily, never mutated and never evicted.

use crate::descriptor::{
    ClosingBehavior, Descriptor, DescriptorKey, DescriptorParams, DisplayMode,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Interning cache of element descriptors
///
/// Create one per run (or per test) and pass it by reference to whatever builds trees.
/// `intern` takes `&self`, so a registry can be shared between threads building separate
/// trees; two concurrent requests for the same key always get the same instance.
///
/// # Examples
///
/// ```ignore
/// let registry = DescriptorRegistry::new();
/// let a = registry.intern("p", DisplayMode::Block, ClosingBehavior::Paired, vec![]);
/// let b = registry.intern("p", DisplayMode::Block, ClosingBehavior::Paired, vec![]);
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: RwLock<HashMap<DescriptorKey, Arc<Descriptor>>>,
}

impl DescriptorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DescriptorRegistry {
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// Return the shared descriptor for these attributes, creating it on first request
    ///
    /// No validation is performed: an empty or odd tag simply becomes its own entry.
    pub fn intern(
        &self,
        tag: impl Into<String>,
        display: DisplayMode,
        closing: ClosingBehavior,
        classes: Vec<String>,
    ) -> Arc<Descriptor> {
        self.intern_key(DescriptorKey::new(tag, display, closing, classes))
    }

    /// Same as [`DescriptorRegistry::intern`] for an owned parameter bundle
    pub fn intern_params(&self, params: &DescriptorParams) -> Arc<Descriptor> {
        self.intern_key(params.key())
    }

    /// Intern by key
    pub fn intern_key(&self, key: DescriptorKey) -> Arc<Descriptor> {
        {
            let descriptors = self.descriptors.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = descriptors.get(&key) {
                tracing::trace!(tag = %existing.tag(), "descriptor cache hit");
                return Arc::clone(existing);
            }
        }

        // Another writer may have inserted the key between the two locks; the entry API
        // settles it under the write lock.
        let mut descriptors = self.descriptors.write().unwrap_or_else(PoisonError::into_inner);
        let size_before = descriptors.len();
        match descriptors.entry(key) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let descriptor = Arc::new(Descriptor::from(entry.key().clone()));
                tracing::debug!(
                    tag = %descriptor.tag(),
                    classes = ?descriptor.classes(),
                    interned = size_before + 1,
                    "interned new descriptor"
                );
                Arc::clone(entry.insert(descriptor))
            }
        }
    }

    /// Number of distinct descriptors interned so far
    pub fn len(&self) -> usize {
        self.descriptors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List interned tag names (sorted, de-duplicated)
    pub fn tags(&self) -> Vec<String> {
        let descriptors = self.descriptors.read().unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<String> = descriptors.keys().map(|k| k.tag().to_string()).collect();
        tags.sort();
        tags.dedup();
        tags
    }
}
