// File: crates/survey-figs/src/input.rs
// Summary: Long-form CSV loader (category,label,count) for externally supplied tables.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use figs_core::{Category, CategoryTable};

/// Load a category table from long-form CSV: one row per bar, categories
/// grouped by first appearance, row order preserved within each.
pub fn load_table(path: &Path) -> Result<CategoryTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_cat = idx(&["category", "title"]).ok_or_else(|| anyhow!("missing 'category' column"))?;
    let i_label = idx(&["label"]).ok_or_else(|| anyhow!("missing 'label' column"))?;
    let i_count = idx(&["count", "papers"]).ok_or_else(|| anyhow!("missing 'count' column"))?;

    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, (Vec<String>, Vec<u32>)> = BTreeMap::new();

    for (row, rec) in rdr.records().enumerate() {
        let line = row + 2; // headers occupy line 1
        let rec = rec.with_context(|| format!("reading line {line}"))?;

        let name = rec.get(i_cat).unwrap_or("").trim().to_string();
        if name.is_empty() {
            anyhow::bail!("line {line}: empty category name");
        }
        let label = rec.get(i_label).unwrap_or("").trim().to_string();
        let count: u32 = rec
            .get(i_count)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| {
                format!("line {line}: count for '{label}' is not a non-negative integer")
            })?;

        if !groups.contains_key(&name) {
            order.push(name.clone());
        }
        let entry = groups.entry(name).or_default();
        entry.0.push(label);
        entry.1.push(count);
    }

    let mut table = CategoryTable::new();
    for name in order {
        if let Some((labels, counts)) = groups.remove(&name) {
            table.insert(Category::new(name, labels, counts)?)?;
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn groups_rows_by_first_appearance() {
        let file = write_csv(
            "category,label,count\n\
             LLM type,Open source,24\n\
             Data,Human-generated,14\n\
             LLM type,Proprietary,6\n\
             Data,Synthetic,7\n",
        );

        let table = load_table(file.path()).expect("load");
        let names: Vec<&str> = table.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["LLM type", "Data"]);

        let llm = table.get("LLM type").unwrap();
        assert_eq!(llm.labels(), ["Open source", "Proprietary"]);
        assert_eq!(llm.counts(), [24, 6]);
    }

    #[test]
    fn rejects_non_integer_counts() {
        let file = write_csv("category,label,count\nLLM type,Open source,many\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_negative_counts() {
        let file = write_csv("category,label,count\nLLM type,Open source,-3\n");
        assert!(load_table(file.path()).is_err());
    }

    #[test]
    fn rejects_missing_columns() {
        let file = write_csv("category,label\nLLM type,Open source\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("count"));
    }
}
