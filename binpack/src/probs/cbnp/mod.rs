mod packer;
mod solution;

#[doc(inline)]
pub use packer::CBNPacker;
#[doc(inline)]
pub use solution::CBNSolution;

use std::hash::Hash;

use crate::entities::{Item, PackError};
use crate::source::{ItemSource, Packed, WeightBounds};

/// Distributes `items` over exactly `n_bins` bins, keeping the weight sums balanced.
/// See [`CBNPacker`] for the placement rule.
pub fn pack_constant_bin_number(items: &[Item], n_bins: usize) -> Result<CBNSolution, PackError> {
    Ok(CBNPacker::new(n_bins)?.pack(items))
}

/// Normalizes `source`, packs it with [`pack_constant_bin_number`] and returns the bins in the shape of the source.
pub fn to_constant_bin_number<K: Hash + Eq, R>(
    source: ItemSource<K, R>,
    n_bins: usize,
    bounds: WeightBounds,
) -> Result<Packed<K, R>, PackError> {
    CBNPacker::new(n_bins)?.pack_source(source, bounds)
}
