/// Composite record with positional fields, one of which holds the weight.
pub trait Record {
    /// Numeric value of the field at `position`.
    fn weight_at(&self, position: usize) -> Result<f64, FieldError>;
}

/// Reason why a positional field could not be read as a weight.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The record has fewer fields
    Missing,
    /// The field does not parse as a number
    NonNumeric(String),
}

impl Record for Vec<f64> {
    fn weight_at(&self, position: usize) -> Result<f64, FieldError> {
        self.as_slice().weight_at(position)
    }
}

impl Record for [f64] {
    fn weight_at(&self, position: usize) -> Result<f64, FieldError> {
        self.get(position).copied().ok_or(FieldError::Missing)
    }
}

impl<const N: usize> Record for [f64; N] {
    fn weight_at(&self, position: usize) -> Result<f64, FieldError> {
        self.as_slice().weight_at(position)
    }
}

impl Record for Vec<String> {
    fn weight_at(&self, position: usize) -> Result<f64, FieldError> {
        parse_field(self.get(position).map(String::as_str))
    }
}

impl Record for Vec<&str> {
    fn weight_at(&self, position: usize) -> Result<f64, FieldError> {
        parse_field(self.get(position).copied())
    }
}

fn parse_field(field: Option<&str>) -> Result<f64, FieldError> {
    let field = field.ok_or(FieldError::Missing)?;
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| FieldError::NonNumeric(field.to_owned()))
}
