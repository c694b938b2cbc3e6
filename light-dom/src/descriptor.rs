//! Intrinsic element state.
//!
//! A [`Descriptor`] is the part of an element that many elements can share: its tag,
//! display mode, closing behavior and class list. Descriptors are immutable once built.

use serde::{Deserialize, Serialize};

/// How an element participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Block,
    Inline,
}

/// Whether an element is written as a single tag or as an opening/closing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosingBehavior {
    /// `<tag>` only. Children are never rendered.
    SelfClosing,
    /// `<tag>children</tag>`
    Paired,
}

/// Identity of a descriptor inside a registry.
///
/// Two keys are equal only when all four attributes are equal, class order included.
/// Classes are kept as a sequence rather than joined, so `["a,b"]` and `["a", "b"]`
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorKey {
    tag: String,
    display: DisplayMode,
    closing: ClosingBehavior,
    classes: Vec<String>,
}

impl DescriptorKey {
    pub fn new(
        tag: impl Into<String>,
        display: DisplayMode,
        closing: ClosingBehavior,
        classes: Vec<String>,
    ) -> Self {
        DescriptorKey {
            tag: tag.into(),
            display,
            closing,
            classes,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Shared, immutable attribute bundle of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    tag: String,
    display: DisplayMode,
    closing: ClosingBehavior,
    classes: Vec<String>,
}

impl Descriptor {
    /// Builds a standalone descriptor. Use [`crate::DescriptorRegistry::intern`] to share one.
    pub fn new(
        tag: impl Into<String>,
        display: DisplayMode,
        closing: ClosingBehavior,
        classes: Vec<String>,
    ) -> Self {
        Descriptor {
            tag: tag.into(),
            display,
            closing,
            classes,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn closing(&self) -> ClosingBehavior {
        self.closing
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_self_closing(&self) -> bool {
        self.closing == ClosingBehavior::SelfClosing
    }

    /// The registry key this descriptor would be interned under.
    pub fn key(&self) -> DescriptorKey {
        DescriptorKey::new(
            self.tag.clone(),
            self.display,
            self.closing,
            self.classes.clone(),
        )
    }
}

impl From<DescriptorKey> for Descriptor {
    fn from(key: DescriptorKey) -> Self {
        Descriptor {
            tag: key.tag,
            display: key.display,
            closing: key.closing,
            classes: key.classes,
        }
    }
}

/// Owned request for a descriptor, used wherever a descriptor is described before it exists
/// (root containers, per-kind wrappers, config).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptorParams {
    pub tag: String,
    pub display: DisplayMode,
    pub closing: ClosingBehavior,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl DescriptorParams {
    pub fn new(tag: impl Into<String>, display: DisplayMode, closing: ClosingBehavior) -> Self {
        DescriptorParams {
            tag: tag.into(),
            display,
            closing,
            classes: Vec::new(),
        }
    }

    /// A block-level, paired element with no classes: the shape of every line wrapper.
    pub fn paired_block(tag: impl Into<String>) -> Self {
        Self::new(tag, DisplayMode::Block, ClosingBehavior::Paired)
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn key(&self) -> DescriptorKey {
        DescriptorKey::new(
            self.tag.clone(),
            self.display,
            self.closing,
            self.classes.clone(),
        )
    }
}

impl Default for DescriptorParams {
    /// The book container: `<div class="book">`.
    fn default() -> Self {
        DescriptorParams::paired_block("div").with_classes(["book"])
    }
}
