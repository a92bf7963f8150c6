mod packer;
mod solution;

#[doc(inline)]
pub use packer::CVPacker;
#[doc(inline)]
pub use solution::CVSolution;

use std::hash::Hash;

use crate::entities::{Item, PackError};
use crate::source::{ItemSource, Packed, WeightBounds};

/// Packs `items` into the smallest number of bins with a capacity of `max_volume` the greedy rule finds.
/// See [`CVPacker`] for the placement rule.
pub fn pack_constant_volume(items: &[Item], max_volume: f64) -> Result<CVSolution, PackError> {
    Ok(CVPacker::new(max_volume)?.pack(items))
}

/// Normalizes `source`, packs it with [`pack_constant_volume`] and returns the bins in the shape of the source.
pub fn to_constant_volume<K: Hash + Eq, R>(
    source: ItemSource<K, R>,
    max_volume: f64,
    bounds: WeightBounds,
) -> Result<Packed<K, R>, PackError> {
    CVPacker::new(max_volume)?.pack_source(source, bounds)
}
