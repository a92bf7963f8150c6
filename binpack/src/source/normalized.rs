use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::entities::{Bin, Item};

/// Uniform item sequence derived from an [`ItemSource`](crate::source::ItemSource),
/// remembering where every item came from.
#[derive(Debug)]
pub struct Normalized<K, R> {
    items: Vec<Item>,
    origin: Origin<K, R>,
}

#[derive(Debug)]
pub(crate) enum Origin<K, R> {
    Weights,
    Mapping(Vec<K>),
    Records(Vec<R>),
}

/// Packed bins in the shape of the original [`ItemSource`](crate::source::ItemSource).
#[derive(Debug, Clone, PartialEq)]
pub enum Packed<K: Hash + Eq, R> {
    Weights(Vec<Vec<f64>>),
    Mapping(Vec<IndexMap<K, f64>>),
    Records(Vec<Vec<R>>),
}

impl<K: Hash + Eq, R> Normalized<K, R> {
    pub(crate) fn new(items: Vec<Item>, origin: Origin<K, R>) -> Self {
        Self { items, origin }
    }

    /// The items to pack, in source order. Items left out by weight bounds are absent.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Converts the bins back into the shape of the source.
    /// Within a bin, entries keep the order in which they were placed.
    ///
    /// # Panics
    /// If `bins` contain an item which does not originate from this source, or the same item twice.
    pub fn reassemble(self, bins: &[Bin]) -> Packed<K, R> {
        match self.origin {
            Origin::Weights => Packed::Weights(
                bins.iter()
                    .map(|b| b.item_weights().collect_vec())
                    .collect_vec(),
            ),
            Origin::Mapping(keys) => {
                let mut keys = keys.into_iter().map(Some).collect_vec();
                Packed::Mapping(
                    bins.iter()
                        .map(|b| {
                            b.items()
                                .iter()
                                .map(|i| (take_origin(&mut keys, i.id()), i.weight()))
                                .collect::<IndexMap<K, f64>>()
                        })
                        .collect_vec(),
                )
            }
            Origin::Records(records) => {
                let mut records = records.into_iter().map(Some).collect_vec();
                Packed::Records(
                    bins.iter()
                        .map(|b| {
                            b.item_ids()
                                .map(|id| take_origin(&mut records, id))
                                .collect_vec()
                        })
                        .collect_vec(),
                )
            }
        }
    }
}

fn take_origin<T>(slots: &mut [Option<T>], id: usize) -> T {
    slots
        .get_mut(id)
        .and_then(Option::take)
        .unwrap_or_else(|| panic!("item {id} does not originate from this source or is packed twice"))
}

impl<K: Hash + Eq, R> Packed<K, R> {
    /// Number of bins
    pub fn len(&self) -> usize {
        match self {
            Packed::Weights(b) => b.len(),
            Packed::Mapping(b) => b.len(),
            Packed::Records(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_weights(self) -> Option<Vec<Vec<f64>>> {
        match self {
            Packed::Weights(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_mapping(self) -> Option<Vec<IndexMap<K, f64>>> {
        match self {
            Packed::Mapping(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<Vec<R>>> {
        match self {
            Packed::Records(b) => Some(b),
            _ => None,
        }
    }
}
