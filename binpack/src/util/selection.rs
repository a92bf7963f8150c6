use std::cmp::{Ordering, Reverse};

use itertools::Itertools;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::entities::Item;
use crate::util::Backend;

/// Below this number of bins the parallel backend scans sequentially.
pub const PAR_SCAN_THRESHOLD: usize = 256;

/// Indices of `weights` ordered by descending weight.
/// The sort is stable: equal weights keep their original relative order.
pub fn argsort_desc(weights: &[f64]) -> Vec<usize> {
    (0..weights.len())
        .sorted_by(|&a, &b| weights[b].total_cmp(&weights[a]))
        .collect_vec()
}

/// Items ordered by descending weight, stable with respect to the input order.
pub fn sort_desc(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .copied()
        .sorted_by_key(|item| Reverse(item.weight_key()))
        .collect_vec()
}

/// Index of the smallest value among `candidates`, ties are resolved to the lowest index.
/// Returns `None` if there are no candidates.
pub fn argmin(values: &[f64], candidates: impl IntoIterator<Item = usize>) -> Option<usize> {
    candidates.into_iter().reduce(|a, b| lowest(values, a, b))
}

/// Index of the largest value among `candidates`, ties are resolved to the lowest index.
/// Returns `None` if there are no candidates.
pub fn argmax(values: &[f64], candidates: impl IntoIterator<Item = usize>) -> Option<usize> {
    candidates.into_iter().reduce(|a, b| highest(values, a, b))
}

/// Parallel counterpart of [`argmin`], with the same tie-breaking.
#[cfg(feature = "parallel")]
pub fn par_argmin<I>(values: &[f64], candidates: I) -> Option<usize>
where
    I: IntoParallelIterator<Item = usize>,
{
    candidates
        .into_par_iter()
        .reduce_with(|a, b| lowest(values, a, b))
}

/// Index of the lowest value in `values` whose index satisfies `filter`, ties resolved to the lowest index.
/// The scan is performed by the given [`Backend`], or sequentially if it is unavailable in this build.
/// Callers in a loop should resolve the backend once with [`Backend::effective`].
pub fn argmin_where<F>(backend: Backend, values: &[f64], filter: F) -> Option<usize>
where
    F: Fn(usize) -> bool + Sync + Send,
{
    match backend {
        #[cfg(feature = "parallel")]
        Backend::Parallel if values.len() >= PAR_SCAN_THRESHOLD => {
            par_argmin(values, (0..values.len()).into_par_iter().filter(|&i| filter(i)))
        }
        _ => argmin(values, (0..values.len()).filter(|&i| filter(i))),
    }
}

// total order on (value, index), which keeps the reduction associative
fn lowest(values: &[f64], a: usize, b: usize) -> usize {
    match values[a].total_cmp(&values[b]).then(a.cmp(&b)) {
        Ordering::Greater => b,
        _ => a,
    }
}

fn highest(values: &[f64], a: usize, b: usize) -> usize {
    match values[a].total_cmp(&values[b]).then(b.cmp(&a)) {
        Ordering::Less => b,
        _ => a,
    }
}
