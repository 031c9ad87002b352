// File: crates/figs-core/src/category.rs
// Summary: Category model: ordered label/count pairs with explicit shape validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("category '{name}': {labels} labels but {counts} counts")]
    LengthMismatch {
        name: String,
        labels: usize,
        counts: usize,
    },
    #[error("category '{name}' has no rows")]
    Empty { name: String },
    #[error("duplicate category '{name}'")]
    Duplicate { name: String },
}

/// One tabulation block: a display name plus parallel, ordered labels and counts.
/// Contract: labels and counts are the same non-zero length; order is the bar order.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    labels: Vec<String>,
    counts: Vec<u32>,
}

impl Category {
    /// Construct a category, enforcing the label/count pairing invariant.
    pub fn new(
        name: impl Into<String>,
        labels: Vec<String>,
        counts: Vec<u32>,
    ) -> Result<Self, CategoryError> {
        let name = name.into();
        if labels.len() != counts.len() {
            return Err(CategoryError::LengthMismatch {
                name,
                labels: labels.len(),
                counts: counts.len(),
            });
        }
        if labels.is_empty() {
            return Err(CategoryError::Empty { name });
        }
        Ok(Self { name, labels, counts })
    }

    /// Convenience constructor over `(label, count)` rows.
    pub fn from_pairs(name: impl Into<String>, rows: &[(&str, u32)]) -> Result<Self, CategoryError> {
        let labels = rows.iter().map(|&(l, _)| l.to_string()).collect();
        let counts = rows.iter().map(|&(_, c)| c).collect();
        Self::new(name, labels, counts)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label/count rows in declared order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Deterministic filename stem: spaces become underscores, then lowercased.
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_").to_lowercase()
    }
}

/// Insertion-ordered set of categories keyed by name. Iteration order is the
/// chart generation order.
#[derive(Clone, Debug, Default)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category; a name seen before is rejected rather than replaced.
    pub fn insert(&mut self, category: Category) -> Result<(), CategoryError> {
        if self.categories.iter().any(|c| c.name == category.name) {
            return Err(CategoryError::Duplicate { name: category.name });
        }
        self.categories.push(category);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
