//! Export tests for markup (tree → string)
//!
//! These tests build small trees by hand and check the exact serialized output.

use insta::assert_snapshot;
use light_dom::{
    build_list, build_tree, inner_html, render, render_element, ClassifiedLine, ClosingBehavior,
    DescriptorParams, DescriptorRegistry, DisplayMode, ElementKind, ElementNode, Node,
};

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_book_example() {
    let registry = DescriptorRegistry::new();
    let root = DescriptorParams::paired_block("div").with_classes(["book"]);
    let lines = vec![
        ClassifiedLine::new("Title", ElementKind::Heading),
        ClassifiedLine::new("A short line", ElementKind::Subheading),
        ClassifiedLine::new("A normal length paragraph line here", ElementKind::Paragraph),
    ];
    let tree = build_tree(&registry, &root, &lines);

    assert_snapshot!(
        render_element(&tree),
        @r#"<div class="book"><h1>Title</h1><h2>A short line</h2><p>A normal length paragraph line here</p></div>"#
    );
}

#[test]
fn test_navigation_menu() {
    let registry = DescriptorRegistry::new();
    let ul = DescriptorParams::paired_block("ul").with_classes(["nav-list", "main-menu"]);
    let li = DescriptorParams::paired_block("li");
    let menu = build_list(&registry, &ul, &li, ["Home", "About", "Services", "Contact"]);

    assert_snapshot!(
        render_element(&menu),
        @r#"<ul class="nav-list main-menu"><li>Home</li><li>About</li><li>Services</li><li>Contact</li></ul>"#
    );
    assert_snapshot!(
        inner_html(&menu),
        @"<li>Home</li><li>About</li><li>Services</li><li>Contact</li>"
    );
}

#[test]
fn test_quote_line() {
    let registry = DescriptorRegistry::new();
    let lines = vec![ClassifiedLine::new(
        "  an indented quotation line",
        ElementKind::Quote,
    )];
    let tree = build_tree(&registry, &DescriptorParams::default(), &lines);

    assert_eq!(
        render_element(&tree),
        "<div class=\"book\"><blockquote>  an indented quotation line</blockquote></div>"
    );
}

// ============================================================================
// CLOSING BEHAVIOR
// ============================================================================

#[test]
fn test_self_closing_root_hides_every_line() {
    let registry = DescriptorRegistry::new();
    let root = DescriptorParams::new("hr", DisplayMode::Block, ClosingBehavior::SelfClosing)
        .with_classes(["divider"]);
    let lines = vec![ClassifiedLine::new("never shown", ElementKind::Paragraph)];
    let tree = build_tree(&registry, &root, &lines);

    assert_eq!(tree.child_count(), 1);
    assert_eq!(render_element(&tree), "<hr class=\"divider\">");
}

#[test]
fn test_self_closing_inside_paired() {
    let registry = DescriptorRegistry::new();
    let br = registry.intern("br", DisplayMode::Inline, ClosingBehavior::SelfClosing, vec![]);
    let p = registry.intern_params(&DescriptorParams::paired_block("p"));

    let para = ElementNode::new(p)
        .with_child(Node::text("line one"))
        .with_child(ElementNode::new(br).with_child(Node::text("dropped")))
        .with_child(Node::text("line two"));

    assert_eq!(render_element(&para), "<p>line one<br>line two</p>");
}

#[test]
fn test_paired_empty_with_and_without_classes() {
    let registry = DescriptorRegistry::new();
    let bare = ElementNode::new(registry.intern_params(&DescriptorParams::paired_block("section")));
    let classed = ElementNode::new(
        registry.intern_params(&DescriptorParams::paired_block("section").with_classes(["a", "b"])),
    );

    assert_eq!(render_element(&bare), "<section></section>");
    assert_eq!(render_element(&classed), "<section class=\"a b\"></section>");
}

// ============================================================================
// TEXT HANDLING
// ============================================================================

#[test]
fn test_markup_characters_pass_through_unescaped() {
    let text = Node::text("<script>alert(\"x\")</script> & more");
    assert_eq!(render(&text), "<script>alert(\"x\")</script> & more");
}

#[test]
fn test_deep_nesting() {
    let registry = DescriptorRegistry::new();
    let div = registry.intern_params(&DescriptorParams::paired_block("div"));

    let mut node = ElementNode::new(div.clone()).with_child(Node::text("core"));
    for _ in 0..50 {
        node = ElementNode::new(div.clone()).with_child(node);
    }

    let html = render_element(&node);
    assert!(html.starts_with(&"<div>".repeat(51)));
    assert!(html.ends_with(&"</div>".repeat(51)));
    assert!(html.contains("<div>core</div>"));
    assert_eq!(registry.len(), 1);
}
