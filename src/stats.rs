// ---------------------------------------------------------------------------
// Pearson product-moment correlation
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient between two equal-length slices.
///
/// Returns a value in [-1, 1] for well-defined input. Degenerate input is
/// absorbed into a `0.0` fallback rather than an error:
/// * empty or length-mismatched slices
/// * zero variance on either side (a constant series has undefined correlation)
///
/// The result is raw arithmetic, not clamped; rounding can land marginally
/// outside [-1, 1] and callers comparing against the bounds should allow a
/// small tolerance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (numerator, dev_x, dev_y) =
        x.iter()
            .zip(y.iter())
            .fold((0.0, 0.0, 0.0), |(num, dx, dy), (&xi, &yi)| {
                let a = xi - mean_x;
                let b = yi - mean_y;
                (num + a * b, dx + a * a, dy + b * b)
            });

    if dev_x == 0.0 || dev_y == 0.0 {
        return 0.0;
    }

    numerator / (dev_x.sqrt() * dev_y.sqrt())
}
