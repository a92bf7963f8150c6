use std::hash::Hash;
use std::time::Instant;

use log::{info, trace};
use thousands::Separable;

use crate::entities::{Bin, InvalidParameterError, Item, PackError};
use crate::probs::cbnp::CBNSolution;
use crate::source::{ItemSource, Packed, WeightBounds};
use crate::util::Backend;
use crate::util::assertions::{bin_weights_consistent, bins_partition_items};
use crate::util::selection::{argmin_where, sort_desc};

/// Longest-Processing-Time (LPT) packer for a fixed number of bins.
///
/// All bins exist from the start. Items are placed from heavy to light (stable with respect to the input order),
/// each into the bin with the lowest weight sum, ties going to the lowest bin index.
/// No capacity is enforced, and bins are never rebalanced after placement.
#[derive(Debug, Clone, Copy)]
pub struct CBNPacker {
    n_bins: usize,
    backend: Backend,
}

impl CBNPacker {
    /// `n_bins` has to be at least 1.
    pub fn new(n_bins: usize) -> Result<Self, InvalidParameterError> {
        if n_bins == 0 {
            return Err(InvalidParameterError::ZeroBins);
        }
        Ok(Self {
            n_bins,
            backend: Backend::default(),
        })
    }

    /// A backend that is unavailable in this build is resolved to one that is, see [`Backend::effective`].
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend.effective();
        self
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn pack(&self, items: &[Item]) -> CBNSolution {
        let start = Instant::now();

        let mut bins = vec![Bin::new(); self.n_bins];
        let mut sums = vec![0.0; self.n_bins];

        for item in sort_desc(items) {
            let b = argmin_where(self.backend, &sums, |_| true)
                .expect("there is always at least one bin");
            bins[b].insert(item);
            sums[b] = bins[b].weight();
            trace!("[CBNP] item {} ({}) -> bin {b} ({})", item.id(), item.weight(), sums[b]);
        }

        let solution = CBNSolution { bins };

        debug_assert!(solution.bins.len() == self.n_bins);
        debug_assert!(bins_partition_items(items, &solution.bins));
        debug_assert!(bin_weights_consistent(&solution.bins));

        info!(
            "[CBNP] distributed {} items over {} bins (spread {:.3}) in {:.3}ms",
            items.len().separate_with_commas(),
            self.n_bins.separate_with_commas(),
            solution.weight_spread(),
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
