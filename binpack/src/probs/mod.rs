use crate::entities::Bin;

/// Constant Volume Packing (CVP): as few bins of fixed capacity as possible
pub mod cvp;

/// Constant Bin Number Packing (CBNP): a fixed number of bins with balanced weights
pub mod cbnp;

/// Shared view on the solutions of both packing variants.
pub trait Solution {
    /// Name of the variant which produced the solution
    const VARIANT: &'static str;

    /// The bins, in order of creation
    fn bins(&self) -> &[Bin];

    fn n_bins(&self) -> usize {
        self.bins().len()
    }

    fn n_items(&self) -> usize {
        self.bins().iter().map(Bin::len).sum()
    }

    fn total_weight(&self) -> f64 {
        self.bins().iter().map(Bin::weight).sum()
    }

    /// Weight sums of all bins
    fn bin_weights(&self) -> Vec<f64> {
        self.bins().iter().map(Bin::weight).collect()
    }
}
