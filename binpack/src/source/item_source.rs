use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

use log::debug;

use crate::entities::{InvalidInputError, Item, PackError};
use crate::source::normalized::Origin;
use crate::source::record::{FieldError, Record};
use crate::source::{Normalized, WeightBounds};

/// The shapes of input which can be packed.
/// Resolved once into a uniform sequence of [`Item`]s by [`ItemSource::normalize`].
pub enum ItemSource<K, R> {
    /// Plain ordered sequence of weights
    Weights(Vec<f64>),
    /// Key to weight pairs, in iteration order
    Mapping(Vec<(K, f64)>),
    /// Composite records together with a way to extract their weight
    Records {
        records: Vec<R>,
        extractor: WeightExtractor<R>,
    },
}

/// Identifies the weight within a record.
pub enum WeightExtractor<R> {
    /// Weight is stored in the positional field of the record
    Position {
        position: usize,
        field: fn(&R, usize) -> Result<f64, FieldError>,
    },
    /// Weight is computed from the record, `None` if the record carries no weight
    Key(Box<dyn Fn(&R) -> Option<f64>>),
}

impl<R: Record> WeightExtractor<R> {
    pub fn position(position: usize) -> Self {
        WeightExtractor::Position {
            position,
            field: R::weight_at,
        }
    }
}

impl<R> WeightExtractor<R> {
    pub fn key(f: impl Fn(&R) -> Option<f64> + 'static) -> Self {
        WeightExtractor::Key(Box::new(f))
    }

    fn extract(&self, index: usize, record: &R) -> Result<f64, InvalidInputError> {
        match self {
            WeightExtractor::Position { position, field } => {
                field(record, *position).map_err(|e| match e {
                    FieldError::Missing => InvalidInputError::MissingField {
                        index,
                        position: *position,
                    },
                    FieldError::NonNumeric(value) => InvalidInputError::NonNumericField {
                        index,
                        position: *position,
                        value,
                    },
                })
            }
            WeightExtractor::Key(f) => f(record).ok_or(InvalidInputError::ExtractorRejected { index }),
        }
    }
}

impl<R> Debug for WeightExtractor<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightExtractor::Position { position, .. } => write!(f, "Position({position})"),
            WeightExtractor::Key(_) => write!(f, "Key(..)"),
        }
    }
}

impl ItemSource<(), ()> {
    pub fn weights(weights: impl IntoIterator<Item = f64>) -> Self {
        ItemSource::Weights(weights.into_iter().collect())
    }
}

impl<K> ItemSource<K, ()> {
    /// Key to weight pairs. The iteration order of `pairs` becomes the order of the items,
    /// which determines how ties between equal weights are broken.
    pub fn mapping(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        ItemSource::Mapping(pairs.into_iter().collect())
    }
}

impl<R> ItemSource<(), R> {
    pub fn records(records: Vec<R>, extractor: WeightExtractor<R>) -> Self {
        ItemSource::Records { records, extractor }
    }
}

impl<K: Hash + Eq, R> ItemSource<K, R> {
    pub fn len(&self) -> usize {
        match self {
            ItemSource::Weights(w) => w.len(),
            ItemSource::Mapping(m) => m.len(),
            ItemSource::Records { records, .. } => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates all weights, leaves out the items outside of `bounds` and returns the remaining items
    /// together with everything needed to reassemble packed bins into the shape of this source.
    pub fn normalize(self, bounds: WeightBounds) -> Result<Normalized<K, R>, PackError> {
        bounds.validate()?;

        let (weights, origin) = match self {
            ItemSource::Weights(weights) => (weights, Origin::Weights),
            ItemSource::Mapping(pairs) => {
                {
                    let mut seen = HashSet::with_capacity(pairs.len());
                    if let Some(index) = pairs.iter().position(|(k, _)| !seen.insert(k)) {
                        return Err(InvalidInputError::DuplicateKey { index }.into());
                    }
                }
                let (keys, weights): (Vec<K>, Vec<f64>) = pairs.into_iter().unzip();
                (weights, Origin::Mapping(keys))
            }
            ItemSource::Records { records, extractor } => {
                let weights = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| extractor.extract(i, r))
                    .collect::<Result<Vec<f64>, _>>()?;
                (weights, Origin::Records(records))
            }
        };

        let all_items = Item::from_weights(&weights)?;
        let n_total = all_items.len();
        let items: Vec<Item> = all_items
            .into_iter()
            .filter(|i| bounds.contains(i.weight()))
            .collect();

        if items.len() < n_total {
            debug!(
                "[SRC] {} of {} items left out by weight bounds {:?}",
                n_total - items.len(),
                n_total,
                bounds
            );
        }

        Ok(Normalized::new(items, origin))
    }
}
