//! End-to-end: plain-text book file → classified lines → tree → markup.

use insta::assert_snapshot;
use light_dom::source::read_lines;
use light_dom::{
    classify_lines, lines_to_markup, ClassifierRules, DescriptorParams, DescriptorRegistry,
    ElementKind, InterningReport,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_book_fixture_classification() {
    let lines = read_lines(fixture("book.txt")).expect("fixture to load");
    let kinds: Vec<_> = classify_lines(&lines, &ClassifierRules::default())
        .into_iter()
        .map(|l| l.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            ElementKind::Heading,
            ElementKind::Subheading,
            ElementKind::Paragraph,
            ElementKind::Quote,
            ElementKind::Subheading,
            ElementKind::Paragraph,
        ]
    );
}

#[test]
fn test_book_fixture_to_markup() {
    let lines = read_lines(fixture("book.txt")).expect("fixture to load");
    let registry = DescriptorRegistry::new();
    let html = lines_to_markup(
        &registry,
        &DescriptorParams::default(),
        &lines,
        &ClassifierRules::default(),
    );

    assert_snapshot!(
        html,
        @r#"<div class="book"><h1>The Little Book</h1><h2>Chapter One</h2><p>It was a bright cold day in April, and the clocks were striking thirteen.</p><blockquote> "Freedom is the freedom to say that two plus two make four."</blockquote><h2>Chapter Two</h2><p>The hallway smelt of boiled cabbage and old rag mats.</p></div>"#
    );
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_book_fixture_report() {
    let lines = read_lines(fixture("book.txt")).expect("fixture to load");
    let classified = classify_lines(&lines, &ClassifierRules::default());
    let report = InterningReport::compare(&DescriptorParams::default(), &classified);

    assert_eq!(report.lines, 6);
    assert_eq!(report.root_children, 6);
    assert_eq!(report.interned_descriptors, 5);
    assert_eq!(report.fresh_descriptors, 7);
    assert!(report.outputs_match);
    assert_eq!(report.tags, vec!["blockquote", "div", "h1", "h2", "p"]);
}
