use crate::entities::{Bin, Item};
use itertools::Itertools;
use log::error;

/// Every item appears in exactly one bin and the bins contain nothing else.
pub fn bins_partition_items(items: &[Item], bins: &[Bin]) -> bool {
    let expected = items.iter().map(|i| (i.id(), i.weight().to_bits())).sorted().collect_vec();
    let packed = bins
        .iter()
        .flat_map(|b| b.items())
        .map(|i| (i.id(), i.weight().to_bits()))
        .sorted()
        .collect_vec();

    if expected != packed {
        error!(
            "bins hold {} items, expected the {} input items exactly once",
            packed.len(),
            expected.len()
        );
        return false;
    }
    true
}

/// The cached weight of each bin matches the sum of its items, up to rounding.
pub fn bin_weights_consistent(bins: &[Bin]) -> bool {
    bins.iter().all(|b| {
        let recomputed = b.item_weights().sum::<f64>();
        float_cmp::approx_eq!(f64, b.weight(), recomputed, epsilon = 1e-9, ulps = 4)
    })
}

/// All bins respect the capacity, except those holding a single oversized item.
pub fn bins_within_capacity(bins: &[Bin], max_volume: f64) -> bool {
    bins.iter()
        .all(|b| b.weight() <= max_volume || b.len() == 1)
}
