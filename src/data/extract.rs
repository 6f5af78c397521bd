use super::model::StatDataset;

// ---------------------------------------------------------------------------
// Column-pair extraction
// ---------------------------------------------------------------------------

/// Pull two named columns out of the dataset as aligned numeric vectors.
///
/// A row contributes a pair when:
/// * Both columns are present in the row (absent key ≠ empty cell)
/// * Both cells parse (whitespace-trimmed) as `f64`
///
/// Any other row is skipped whole, so the two vectors always have equal
/// length and element i of each comes from the same source row. Missing
/// columns and dirty cells are not errors; they just shrink the output,
/// possibly to empty. Callers must check for emptiness before interpreting
/// a correlation over the result.
pub fn extract_column_pair(
    dataset: &StatDataset,
    col_a: &str,
    col_b: &str,
) -> (Vec<f64>, Vec<f64>) {
    let mut x_vals = Vec::new();
    let mut y_vals = Vec::new();

    for row in &dataset.rows {
        let (Some(cell_a), Some(cell_b)) = (row.get(col_a), row.get(col_b)) else {
            continue;
        };
        match (cell_a.trim().parse::<f64>(), cell_b.trim().parse::<f64>()) {
            (Ok(x), Ok(y)) => {
                x_vals.push(x);
                y_vals.push(y);
            }
            _ => continue, // non-numeric cell, skip the row
        }
    }

    (x_vals, y_vals)
}
