use crate::entities::InvalidInputError;
use ordered_float::NotNan;

/// Weighted item to be packed.
/// The `id` refers back to the position the item had in its [`ItemSource`](crate::source::ItemSource).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    id: usize,
    weight: NotNan<f64>,
}

impl Item {
    /// Creates a new item, weights have to be finite and non-negative.
    pub fn new(id: usize, weight: f64) -> Result<Self, InvalidInputError> {
        if !weight.is_finite() {
            return Err(InvalidInputError::NonFiniteWeight { index: id, weight });
        }
        if weight < 0.0 {
            return Err(InvalidInputError::NegativeWeight { index: id, weight });
        }
        //-0.0 is normalized to 0.0, so that identical weights always serialize identically
        let weight = NotNan::new(weight + 0.0).map_err(|_| InvalidInputError::NonFiniteWeight { index: id, weight })?;
        Ok(Self { id, weight })
    }

    /// Creates items from a plain sequence of weights, ids are the positions in the sequence.
    pub fn from_weights(weights: &[f64]) -> Result<Vec<Self>, InvalidInputError> {
        weights
            .iter()
            .enumerate()
            .map(|(id, &w)| Item::new(id, w))
            .collect()
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight.into_inner()
    }

    pub(crate) fn weight_key(&self) -> NotNan<f64> {
        self.weight
    }
}
