use serde::{Deserialize, Serialize};

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    /// Position of the bin in the solution
    pub index: usize,
    /// Sum of the weights of the items in the bin
    pub weight: f64,
    /// Ids of the items, in order of placement
    pub item_ids: Vec<usize>,
    /// Weights of the items, in order of placement
    pub item_weights: Vec<f64>,
}

/// External representation of a packing solution of either variant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// `constant_volume` or `constant_bin_number`
    pub variant: String,
    pub n_bins: usize,
    pub n_items: usize,
    pub total_weight: f64,
    pub bins: Vec<ExtBin>,
    /// The time it took to generate the solution in seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub run_time_sec: Option<f64>,
}
