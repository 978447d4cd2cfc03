//! Statistical mode over discrete float values
//!
//! Calendar columns hold a handful of quantized floats, so equality is
//! exact: two cells belong to the same bucket when their bit patterns match
//! (with `-0.0` folded into `0.0`).

/// Most frequent finite value in `data`
///
/// Ties resolve to the value whose first occurrence comes earliest, which
/// keeps the result stable for a fixed row order.
pub fn mode(data: &[f64]) -> Option<f64> {
    // (value, count) in first-appearance order; the domain is tiny, so a
    // linear scan beats hashing
    let mut buckets: Vec<(f64, usize)> = Vec::new();

    for &value in data.iter().filter(|x| x.is_finite()) {
        let value = if value == 0.0 { 0.0 } else { value };
        match buckets
            .iter_mut()
            .find(|(seen, _)| seen.to_bits() == value.to_bits())
        {
            Some((_, count)) => *count += 1,
            None => buckets.push((value, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (value, count) in buckets {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}
