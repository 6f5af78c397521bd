use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Row – one record of the source table
// ---------------------------------------------------------------------------

/// A single table row: column name → cell text.
///
/// Rows share no guaranteed key set. A short source record simply lacks the
/// trailing keys, and downstream code must treat "key absent" differently from
/// "cell present but empty" — absence is checked, never defaulted.
pub type Row = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// StatDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with a pre-computed column index.
#[derive(Debug, Clone, Default)]
pub struct StatDataset {
    /// All rows, in source-file order.
    pub rows: Vec<Row>,
    /// Sorted union of column names appearing in any row.
    pub column_names: Vec<String>,
}

impl StatDataset {
    /// Build the column index from the loaded rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut column_names_set: BTreeSet<&str> = BTreeSet::new();
        for row in &rows {
            for col in row.keys() {
                column_names_set.insert(col);
            }
        }
        let column_names: Vec<String> =
            column_names_set.into_iter().map(str::to_string).collect();
        StatDataset { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn column_index_is_union_across_rows() {
        let dataset = StatDataset::from_rows(vec![
            row(&[("PPG", "21.3"), ("AGE", "27")]),
            row(&[("MPG", "34.1")]),
        ]);
        assert_eq!(dataset.column_names, vec!["AGE", "MPG", "PPG"]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn empty_dataset_has_no_columns() {
        let dataset = StatDataset::from_rows(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.column_names.is_empty());
    }
}
