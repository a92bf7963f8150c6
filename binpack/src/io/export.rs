use std::time::Duration;

use itertools::Itertools;

use crate::entities::Bin;
use crate::io::ext_repr::{ExtBin, ExtSolution};
use crate::probs::Solution;

/// Exports a solution out of the library
pub fn export<S: Solution>(solution: &S, run_time: Option<Duration>) -> ExtSolution {
    ExtSolution {
        variant: S::VARIANT.to_owned(),
        n_bins: solution.n_bins(),
        n_items: solution.n_items(),
        total_weight: solution.total_weight(),
        bins: solution
            .bins()
            .iter()
            .enumerate()
            .map(|(i, b)| export_bin(i, b))
            .collect_vec(),
        run_time_sec: run_time.map(|d| d.as_secs_f64()),
    }
}

pub fn export_bin(index: usize, bin: &Bin) -> ExtBin {
    ExtBin {
        index,
        weight: bin.weight(),
        item_ids: bin.item_ids().collect_vec(),
        item_weights: bin.item_weights().collect_vec(),
    }
}
