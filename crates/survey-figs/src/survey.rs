// File: crates/survey-figs/src/survey.rs
// Summary: The built-in survey tabulation table, one entry per figure.

use anyhow::Result;
use figs_core::{Category, CategoryTable};

/// Fixed tabulation from the survey, in publication order.
pub fn table() -> Result<CategoryTable> {
    let blocks: &[(&str, &[(&str, u32)])] = &[
        (
            "Educational level",
            &[
                ("K-12", 10),
                ("High school", 1),
                ("University", 13),
                ("Professionals", 1),
                ("General/not specified", 6),
            ],
        ),
        // Counts reconstructed from the rounded percentage row
        // (62.1 / 20.7 / 13.8 / 3.4); no consistent total recovers those
        // percentages exactly.
        (
            "Subject",
            &[
                ("STEM", 18),
                ("Language and humanities", 6),
                ("General/not specified", 4),
                ("Other", 1),
            ],
        ),
        ("LLM type", &[("Open source", 24), ("Proprietary", 6)]),
        (
            "Data",
            &[
                ("Human-generated", 14),
                ("Synthetic", 7),
                ("Hybrid", 9),
                ("Other", 0),
            ],
        ),
        (
            "Optimization technique",
            &[
                ("Supervised methods", 24),
                ("Unsupervised pre-training", 3),
                ("RL/Preference Optimization", 8),
                ("Other", 6),
            ],
        ),
        (
            "Pedagogical principles",
            &[
                ("Content and accuracy", 23),
                ("Process and strategy", 25),
                ("Learner adaption", 11),
                ("Engagement and affect", 15),
                ("Other", 3),
            ],
        ),
        (
            "Evaluation",
            &[
                ("Automated metrics", 19),
                ("Expert rating", 22),
                ("Learning outcomes", 4),
                ("Other", 1),
            ],
        ),
    ];

    let mut table = CategoryTable::new();
    for (name, rows) in blocks {
        table.insert(Category::from_pairs(*name, rows)?)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_well_formed() {
        let table = table().expect("built-in table validates");
        assert_eq!(table.len(), 7);

        let stems: Vec<String> = table.iter().map(|c| c.file_stem()).collect();
        assert_eq!(
            stems,
            [
                "educational_level",
                "subject",
                "llm_type",
                "data",
                "optimization_technique",
                "pedagogical_principles",
                "evaluation",
            ],
        );

        let llm = table.get("LLM type").expect("LLM type present");
        assert_eq!(llm.counts(), [24, 6]);

        // Every block fits under the fixed [0, 30] axis ceiling
        for category in table.iter() {
            assert!(category.max_count() <= 30, "{} exceeds ceiling", category.name());
        }
    }
}
