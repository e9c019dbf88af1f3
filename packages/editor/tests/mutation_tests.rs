//! Mutation engine laws

use pageforge_document::{collect_ids, contains, BuilderElement, ElementKind, ElementSeed, IdGenerator};
use pageforge_editor::{ElementPatch, Mutation, MutationOutcome};

fn ids() -> IdGenerator {
    IdGenerator::from_seed("page".to_string())
}

fn add(elements: &mut Vec<BuilderElement>, ids: &mut IdGenerator, seed: ElementSeed) -> String {
    let outcome = Mutation::Add { seed }.apply(elements, ids);
    outcome.created().unwrap().to_string()
}

#[test]
fn test_update_on_unknown_id_is_noop() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "hi"));

    let before = elements.clone();
    let outcome = Mutation::Update {
        node_id: "missing".to_string(),
        patch: ElementPatch::content("bye"),
    }
    .apply(&mut elements, &mut ids);

    assert_eq!(outcome, MutationOutcome::Noop);
    assert_eq!(elements, before);
}

#[test]
fn test_delete_on_unknown_id_is_noop() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "hi"));

    let before = elements.clone();
    let outcome = Mutation::Delete {
        node_id: "missing".to_string(),
    }
    .apply(&mut elements, &mut ids);

    assert_eq!(outcome, MutationOutcome::Noop);
    assert_eq!(elements, before);
}

#[test]
fn test_add_then_delete_round_trips() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "keep"));

    let before = elements.clone();
    let id = add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Image, "/a.png"));
    Mutation::Delete { node_id: id }.apply(&mut elements, &mut ids);

    assert_eq!(elements, before);
}

#[test]
fn test_update_merges_styles_shallowly() {
    let mut ids = ids();
    let mut elements = Vec::new();
    let id = add(
        &mut elements,
        &mut ids,
        ElementSeed::new(ElementKind::Text, "hi")
            .with_style("color", "#111111")
            .with_style("fontSize", "16px"),
    );

    Mutation::Update {
        node_id: id.clone(),
        patch: ElementPatch::default()
            .with_style("color", "#ff0000")
            .with_style("padding", "8px"),
    }
    .apply(&mut elements, &mut ids);

    let styles = &elements[0].styles;
    // overwritten
    assert_eq!(styles.get("color").unwrap().as_text(), Some("#ff0000"));
    // extended
    assert_eq!(styles.get("padding").unwrap().as_text(), Some("8px"));
    // omitted key survives
    assert_eq!(styles.get("fontSize").unwrap().as_text(), Some("16px"));
    // content untouched
    assert_eq!(elements[0].content, "hi");
}

#[test]
fn test_update_recurses_into_children() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(
        &mut elements,
        &mut ids,
        ElementSeed::new(ElementKind::Container, "")
            .with_child(ElementSeed::new(ElementKind::Text, "inner")),
    );
    let child_id = elements[0].children[0].id.clone();

    let outcome = Mutation::Update {
        node_id: child_id,
        patch: ElementPatch::content("edited"),
    }
    .apply(&mut elements, &mut ids);

    assert!(outcome.is_applied());
    assert_eq!(elements[0].children[0].content, "edited");
}

#[test]
fn test_delete_removes_nested_subtree() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(
        &mut elements,
        &mut ids,
        ElementSeed::new(ElementKind::Container, "")
            .with_child(ElementSeed::new(ElementKind::Text, "a"))
            .with_child(ElementSeed::new(ElementKind::Text, "b")),
    );
    let first_child = elements[0].children[0].id.clone();

    Mutation::Delete {
        node_id: first_child.clone(),
    }
    .apply(&mut elements, &mut ids);

    assert!(!contains(&elements, &first_child));
    assert_eq!(elements[0].children.len(), 1);
    assert_eq!(elements[0].children[0].content, "b");
}

#[test]
fn test_duplicate_deep_copies_with_fresh_ids() {
    let mut ids = ids();
    let mut elements = Vec::new();
    let container_id = add(
        &mut elements,
        &mut ids,
        ElementSeed::new(ElementKind::Container, "box")
            .with_style("padding", "2rem")
            .with_child(ElementSeed::new(ElementKind::Text, "inner")),
    );
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "other"));

    let outcome = Mutation::Duplicate {
        node_id: container_id.clone(),
    }
    .apply(&mut elements, &mut ids);
    let copy_id = outcome.created().unwrap().to_string();

    // Copy lands as a new top-level sibling, not nested.
    assert_eq!(elements.len(), 3);
    let original = &elements[0];
    let copy = &elements[2];

    assert_eq!(copy.id, copy_id);
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.kind, original.kind);
    assert_eq!(copy.content, "box (Copy)");
    assert_eq!(copy.styles, original.styles);

    // Children are deep-equal but re-identified, keeping tree-wide uniqueness.
    assert_eq!(copy.children.len(), 1);
    assert_eq!(copy.children[0].content, original.children[0].content);
    assert_ne!(copy.children[0].id, original.children[0].id);

    let mut all = collect_ids(&elements);
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);

    // The source subtree is untouched.
    assert_eq!(original.content, "box");
}

#[test]
fn test_duplicate_on_unknown_id_is_noop() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "hi"));

    let before = elements.clone();
    let outcome = Mutation::Duplicate {
        node_id: "missing".to_string(),
    }
    .apply(&mut elements, &mut ids);

    assert_eq!(outcome, MutationOutcome::Noop);
    assert_eq!(elements, before);
}

#[test]
fn test_nesting_composes_from_add_and_update() {
    let mut ids = ids();
    let mut elements = Vec::new();
    let container_id = add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Container, ""));

    let child = ElementSeed::new(ElementKind::Text, "nested").instantiate(&mut ids);
    let child_id = child.id.clone();
    Mutation::Update {
        node_id: container_id,
        patch: ElementPatch::children(vec![child]),
    }
    .apply(&mut elements, &mut ids);

    assert!(contains(&elements, &child_id));
    assert_eq!(elements[0].children.len(), 1);
}

#[test]
fn test_clear_empties_the_forest() {
    let mut ids = ids();
    let mut elements = Vec::new();
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "a"));
    add(&mut elements, &mut ids, ElementSeed::new(ElementKind::Text, "b"));

    let outcome = Mutation::Clear.apply(&mut elements, &mut ids);

    assert!(outcome.is_applied());
    assert!(elements.is_empty());
}
