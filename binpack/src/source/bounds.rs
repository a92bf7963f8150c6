use serde::{Deserialize, Serialize};

use crate::entities::InvalidParameterError;

/// Optional inclusive bounds on item weights.
/// Items with a weight outside `[lower, upper]` are left out before packing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl WeightBounds {
    pub const UNBOUNDED: WeightBounds = WeightBounds {
        lower: None,
        upper: None,
    };

    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// Both bounds have to be numbers and, if both are set, `lower < upper`.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if self.lower.is_some_and(f64::is_nan) || self.upper.is_some_and(f64::is_nan) {
            return Err(InvalidParameterError::NaNBound);
        }
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower >= upper => {
                Err(InvalidParameterError::InvertedBounds { lower, upper })
            }
            _ => Ok(()),
        }
    }

    pub fn contains(&self, weight: f64) -> bool {
        self.lower.is_none_or(|l| weight >= l) && self.upper.is_none_or(|u| weight <= u)
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}
