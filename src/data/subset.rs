use super::model::{Dataset, Subset};

// ---------------------------------------------------------------------------
// Recency window selection
// ---------------------------------------------------------------------------

/// Clamp a requested window size to `[floor, dataset.len()]`.
///
/// When the dataset has fewer rows than `floor`, the whole dataset is used.
pub fn clamp_window(dataset: &Dataset, requested: usize, floor: usize) -> usize {
    let len = dataset.len();
    requested.max(floor).min(len)
}

/// Return an owned copy of the last `clamp(n, floor, len)` rows, in order.
///
/// Out-of-range requests are snapped to the nearest bound rather than
/// rejected; the adjustment is logged.
pub fn get_recent(dataset: &Dataset, requested: usize, floor: usize) -> Subset {
    let n = clamp_window(dataset, requested, floor);
    if n != requested {
        log::warn!("Requested {requested} rows, using {n}");
    }
    let start = dataset.len() - n;
    Subset::new(dataset.records()[start..].to_vec(), start)
}
