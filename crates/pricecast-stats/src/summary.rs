//! Central-tendency summaries for a numeric column
//!
//! Provides:
//! - Median (robust center)
//! - Mean (arithmetic average)

/// Median of the finite values in `data`
///
/// Even-sized samples return the mean of the two middle values.
pub fn median(data: &[f64]) -> Option<f64> {
    median_of_sorted(&sorted(finite_values(data)))
}

/// Arithmetic mean of the finite values in `data`
pub fn mean(data: &[f64]) -> Option<f64> {
    mean_of_finite(&finite_values(data))
}

fn finite_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| x.is_finite()).collect()
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    // Finite values only, so total_cmp agrees with numeric order
    values.sort_by(f64::total_cmp);
    values
}

fn mean_of_finite(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let count = sorted.len();
    if count == 0 {
        return None;
    }

    if count % 2 == 0 {
        Some((sorted[count / 2 - 1] + sorted[count / 2]) / 2.0)
    } else {
        Some(sorted[count / 2])
    }
}
