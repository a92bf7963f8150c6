use crate::entities::Bin;
use crate::probs::Solution;

/// Result of constant volume packing: the bins in order of creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CVSolution {
    /// Capacity of every bin
    pub max_volume: f64,
    pub bins: Vec<Bin>,
}

impl CVSolution {
    /// Bins holding a single item heavier than the capacity
    pub fn oversized_bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter().filter(|b| b.weight() > self.max_volume)
    }

    /// Sum of all weights divided by the total capacity of the opened bins
    pub fn fill_ratio(&self) -> f64 {
        match self.bins.is_empty() {
            true => 0.0,
            false => self.total_weight() / (self.max_volume * self.bins.len() as f64),
        }
    }

    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }
}

impl Solution for CVSolution {
    const VARIANT: &'static str = "constant_volume";

    fn bins(&self) -> &[Bin] {
        &self.bins
    }
}
