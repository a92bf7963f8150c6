/// Any error raised by this library.
/// All validation happens before the first bin is opened, a failed call never yields a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameterError),
}

/// The items (or the data they are extracted from) are malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("weight of item {index} is not a finite number: {weight}")]
    NonFiniteWeight { index: usize, weight: f64 },
    #[error("weight of item {index} is negative: {weight}")]
    NegativeWeight { index: usize, weight: f64 },
    #[error("record {index} has no field at position {position}")]
    MissingField { index: usize, position: usize },
    #[error("field {position} of record {index} is not numeric: {value:?}")]
    NonNumericField {
        index: usize,
        position: usize,
        value: String,
    },
    #[error("weight extractor yielded no weight for record {index}")]
    ExtractorRejected { index: usize },
    #[error("key of item {index} occurs more than once")]
    DuplicateKey { index: usize },
}

/// A packing parameter is out of its domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("maximum bin volume must be a positive finite number, got {0}")]
    NonPositiveVolume(f64),
    #[error("number of bins must be at least 1")]
    ZeroBins,
    #[error("lower bound {lower} is greater than or equal to upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
    #[error("weight bound is not a number")]
    NaNBound,
}
