use std::hash::Hash;
use std::time::Instant;

use log::{info, trace};
use thousands::Separable;

use crate::entities::{Bin, InvalidParameterError, Item, PackError};
use crate::probs::cvp::CVSolution;
use crate::source::{ItemSource, Packed, WeightBounds};
use crate::util::Backend;
use crate::util::assertions::{bin_weights_consistent, bins_partition_items, bins_within_capacity};
use crate::util::selection::{argmin_where, sort_desc};

/// Least-Loaded-Fit-Decreasing packer for bins with a fixed capacity.
///
/// Items are placed from heavy to light (stable with respect to the input order).
/// Every item goes to the emptiest open bin it still fits in, or to a newly opened bin if it fits nowhere.
/// An item heavier than the capacity ends up alone in its own bin.
#[derive(Debug, Clone, Copy)]
pub struct CVPacker {
    max_volume: f64,
    backend: Backend,
}

impl CVPacker {
    /// `max_volume` has to be positive and finite.
    pub fn new(max_volume: f64) -> Result<Self, InvalidParameterError> {
        if !(max_volume.is_finite() && max_volume > 0.0) {
            return Err(InvalidParameterError::NonPositiveVolume(max_volume));
        }
        Ok(Self {
            max_volume,
            backend: Backend::default(),
        })
    }

    /// A backend that is unavailable in this build is resolved to one that is, see [`Backend::effective`].
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend.effective();
        self
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn pack(&self, items: &[Item]) -> CVSolution {
        let start = Instant::now();
        let max_volume = self.max_volume;

        let mut bins: Vec<Bin> = vec![];
        //weight sums of the bins, kept apart so the scan works on a flat slice
        let mut sums: Vec<f64> = vec![];

        for item in sort_desc(items) {
            let weight = item.weight();
            let fitting = argmin_where(self.backend, &sums, |b| sums[b] + weight <= max_volume);

            let b = match fitting {
                Some(b) => b,
                None => {
                    bins.push(Bin::new());
                    sums.push(0.0);
                    bins.len() - 1
                }
            };
            bins[b].insert(item);
            sums[b] = bins[b].weight();
            trace!("[CVP] item {} ({weight}) -> bin {b} ({})", item.id(), sums[b]);
        }

        let solution = CVSolution { max_volume, bins };

        debug_assert!(bins_partition_items(items, &solution.bins));
        debug_assert!(bin_weights_consistent(&solution.bins));
        debug_assert!(bins_within_capacity(&solution.bins, max_volume));

        info!(
            "[CVP] packed {} items into {} bins (capacity {}) in {:.3}ms",
            items.len().separate_with_commas(),
            solution.bins.len().separate_with_commas(),
            max_volume,
            start.elapsed().as_secs_f64() * 1000.0
        );

        solution
    }

    /// Normalizes `source`, packs the items and reassembles the bins into the shape of the source.
    pub fn pack_source<K: Hash + Eq, R>(
        &self,
        source: ItemSource<K, R>,
        bounds: WeightBounds,
    ) -> Result<Packed<K, R>, PackError> {
        let normalized = source.normalize(bounds)?;
        let solution = self.pack(normalized.items());
        Ok(normalized.reassemble(&solution.bins))
    }
}
