// File: crates/figs-core/tests/categories.rs
// Purpose: Validate category shape checks, ordering, and filename derivation.

use figs_core::{Category, CategoryError, CategoryTable};

#[test]
fn rejects_mismatched_lengths() {
    let err = Category::new(
        "Data",
        vec!["Human-generated".to_string(), "Synthetic".to_string()],
        vec![14],
    )
    .unwrap_err();
    assert!(matches!(err, CategoryError::LengthMismatch { .. }));
}

#[test]
fn rejects_empty_category() {
    let err = Category::new("Data", Vec::new(), Vec::new()).unwrap_err();
    assert!(matches!(err, CategoryError::Empty { .. }));
}

#[test]
fn preserves_declared_row_order() {
    let c = Category::from_pairs(
        "Evaluation",
        &[
            ("Automated metrics", 19),
            ("Expert rating", 22),
            ("Learning outcomes", 4),
            ("Other", 1),
        ],
    )
    .unwrap();

    let rows: Vec<(&str, u32)> = c.rows().collect();
    assert_eq!(
        rows,
        vec![
            ("Automated metrics", 19),
            ("Expert rating", 22),
            ("Learning outcomes", 4),
            ("Other", 1),
        ],
    );
    assert_eq!(c.max_count(), 22);
}

#[test]
fn file_stem_is_deterministic() {
    let llm = Category::from_pairs("LLM type", &[("Open source", 24), ("Proprietary", 6)]).unwrap();
    assert_eq!(llm.file_stem(), "llm_type");
    // repeat calls agree: re-runs produce identical filenames
    assert_eq!(llm.file_stem(), llm.file_stem());

    let edu = Category::from_pairs("Educational level", &[("K-12", 10)]).unwrap();
    assert_eq!(edu.file_stem(), "educational_level");
}

#[test]
fn table_keeps_insertion_order_and_rejects_duplicates() {
    let mut table = CategoryTable::new();
    table
        .insert(Category::from_pairs("Subject", &[("STEM", 18)]).unwrap())
        .unwrap();
    table
        .insert(Category::from_pairs("Data", &[("Hybrid", 9)]).unwrap())
        .unwrap();

    let names: Vec<&str> = table.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Subject", "Data"]);
    assert!(table.get("Subject").is_some());
    assert!(table.get("Optimization technique").is_none());

    let dup = table.insert(Category::from_pairs("Subject", &[("Other", 1)]).unwrap());
    assert!(matches!(dup.unwrap_err(), CategoryError::Duplicate { .. }));
    assert_eq!(table.len(), 2);
}
