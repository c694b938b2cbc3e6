//! Registry behavior across trees and threads.

use light_dom::{
    build_tree, render_element, ClassifiedLine, ClosingBehavior, DescriptorParams,
    DescriptorRegistry, DisplayMode, ElementKind,
};
use std::sync::Arc;
use std::thread;

fn chapter(n: usize) -> Vec<ClassifiedLine> {
    let mut lines = vec![ClassifiedLine::new(format!("Chapter {n}"), ElementKind::Heading)];
    for i in 0..20 {
        lines.push(ClassifiedLine::new(
            format!("Paragraph {i} of chapter {n}, long enough to be prose."),
            ElementKind::Paragraph,
        ));
    }
    lines
}

#[test]
fn test_key_sensitivity() {
    let registry = DescriptorRegistry::new();
    let plain = registry.intern("p", DisplayMode::Block, ClosingBehavior::Paired, vec![]);
    let classed = registry.intern(
        "p",
        DisplayMode::Block,
        ClosingBehavior::Paired,
        vec!["a".to_string()],
    );
    let ab = registry.intern(
        "p",
        DisplayMode::Block,
        ClosingBehavior::Paired,
        vec!["a".to_string(), "b".to_string()],
    );
    let ba = registry.intern(
        "p",
        DisplayMode::Block,
        ClosingBehavior::Paired,
        vec!["b".to_string(), "a".to_string()],
    );

    assert!(!Arc::ptr_eq(&plain, &classed));
    assert!(!Arc::ptr_eq(&ab, &ba));
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_registry_survives_dropped_trees() {
    let registry = DescriptorRegistry::new();
    let root = DescriptorParams::default();

    for n in 0..5 {
        let tree = build_tree(&registry, &root, &chapter(n));
        assert_eq!(tree.child_count(), 21);
    }

    // div.book, h1, p
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_parallel_builds_share_one_registry() {
    let registry = DescriptorRegistry::new();
    let root = DescriptorParams::default();

    let rendered: Vec<String> = thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|n| {
                let registry = &registry;
                let root = &root;
                scope.spawn(move || render_element(&build_tree(registry, root, &chapter(n))))
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("builder thread panicked"))
            .collect()
    });

    assert_eq!(rendered.len(), 4);
    for (n, html) in rendered.iter().enumerate() {
        assert!(html.starts_with(&format!("<div class=\"book\"><h1>Chapter {n}</h1>")));
    }
    assert_eq!(registry.len(), 3);
}
