use crate::entities::Bin;
use crate::probs::Solution;
use crate::util::selection::{argmax, argmin};

/// Result of constant bin number packing: exactly the requested number of bins, some possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CBNSolution {
    pub bins: Vec<Bin>,
}

impl CBNSolution {
    /// Index of the heaviest bin (lowest index on ties), `None` if there are no bins
    pub fn heaviest_bin(&self) -> Option<usize> {
        let weights = self.bin_weights();
        argmax(&weights, 0..weights.len())
    }

    /// Index of the lightest bin (lowest index on ties), `None` if there are no bins
    pub fn lightest_bin(&self) -> Option<usize> {
        let weights = self.bin_weights();
        argmin(&weights, 0..weights.len())
    }

    /// Difference between the heaviest and the lightest bin
    pub fn weight_spread(&self) -> f64 {
        match (self.heaviest_bin(), self.lightest_bin()) {
            (Some(h), Some(l)) => self.bins[h].weight() - self.bins[l].weight(),
            _ => 0.0,
        }
    }

    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }
}

impl Solution for CBNSolution {
    const VARIANT: &'static str = "constant_bin_number";

    fn bins(&self) -> &[Bin] {
        &self.bins
    }
}
