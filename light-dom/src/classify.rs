//! Line classification heuristic
//!
//! Decides which [`ElementKind`] wraps each line of a plain-text book:
//!
//! 1. the first line is the heading (unless disabled),
//! 2. short lines are subheadings,
//! 3. lines indented with a space are quotes,
//! 4. everything else is a paragraph.
//!
//! Lines are right-trimmed before they are measured and stored.

use crate::builder::{ClassifiedLine, ElementKind};

/// Knobs for the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    /// Treat line 0 as the document heading
    pub first_line_heading: bool,
    /// Lines with fewer characters than this (after trimming) become subheadings
    pub subheading_max_len: usize,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        ClassifierRules {
            first_line_heading: true,
            subheading_max_len: 20,
        }
    }
}

impl ClassifierRules {
    /// Classify a single, already trimmed line at position `index`
    pub fn classify(&self, index: usize, line: &str) -> ElementKind {
        if index == 0 && self.first_line_heading {
            ElementKind::Heading
        } else if line.chars().count() < self.subheading_max_len {
            ElementKind::Subheading
        } else if line.starts_with(' ') {
            ElementKind::Quote
        } else {
            ElementKind::Paragraph
        }
    }
}

/// Classify every line, keeping input order
pub fn classify_lines<S: AsRef<str>>(lines: &[S], rules: &ClassifierRules) -> Vec<ClassifiedLine> {
    lines
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let line = raw.as_ref().trim_end();
            ClassifiedLine::new(line, rules.classify(index, line))
        })
        .collect()
}
