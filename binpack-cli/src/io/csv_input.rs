use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CsvDialect;

/// Column of a CSV file holding the weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightColumn {
    /// Zero-based position of the field
    Index(usize),
    /// Name of the column in the header
    Name(String),
}

/// Anything parsing as an unsigned integer is a position, the rest is a column name.
impl FromStr for WeightColumn {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(index) => Ok(WeightColumn::Index(index)),
            Err(_) => Ok(WeightColumn::Name(s.to_owned())),
        }
    }
}

impl Display for WeightColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightColumn::Index(index) => write!(f, "{index}"),
            WeightColumn::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Contents of a CSV file, with the weight column resolved to a position.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub weight_column: usize,
}

impl CsvTable {
    pub fn weights(&self) -> Result<Vec<f64>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_weight(row, i, self.weight_column))
            .collect()
    }
}

pub fn load_csv(path: &Path, weight_column: &WeightColumn, dialect: &CsvDialect) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter_byte()?)
        .quote(dialect.quote_byte()?)
        .from_path(path)
        .with_context(|| format!("could not open csv file: {}", path.display()))?;

    let mut records = reader.records();

    let header: Option<Vec<String>> = match dialect.has_header {
        true => {
            let record = records
                .next()
                .transpose()
                .with_context(|| format!("could not read header of {}", path.display()))?;
            Some(record.map(|r| r.iter().map(str::to_owned).collect::<Vec<String>>()).unwrap_or_default())
        }
        false => None,
    };

    let weight_column = match weight_column {
        WeightColumn::Index(index) => *index,
        WeightColumn::Name(name) => {
            let Some(header) = &header else {
                bail!("weight column {name:?} is useless, since the csv has no header");
            };
            header
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("weight column {name:?} not found in header {header:?}"))?
        }
    };

    let rows = records
        .enumerate()
        .map(|(i, record)| {
            let record = record.with_context(|| format!("could not read row {i} of {}", path.display()))?;
            Ok(record.iter().map(str::to_owned).collect::<Vec<String>>())
        })
        .collect::<Result<Vec<_>>>()?;

    let table = CsvTable {
        header,
        rows,
        weight_column,
    };
    // fail before packing on the first malformed weight
    table.weights()?;

    debug!(
        "[CSV] loaded {} rows from {}, weights in column {}",
        table.rows.len(),
        path.display(),
        table.weight_column
    );

    Ok(table)
}

fn parse_weight(row: &[String], row_index: usize, column: usize) -> Result<f64> {
    match row.get(column) {
        None => bail!("row {row_index} has no field in weight column {column}"),
        Some(field) => field
            .trim()
            .parse::<f64>()
            .with_context(|| format!("row {row_index}: weight {field:?} in column {column} is not a number")),
    }
}
