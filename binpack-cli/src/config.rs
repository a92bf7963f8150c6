use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use binpack::source::WeightBounds;
use binpack::util::Backend;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of a packing run. Command line flags take precedence over the values in here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BinPackConfig {
    /// Dialect of the input (and output) CSV files
    #[serde(default)]
    pub csv: CsvDialect,
    /// Rows with a weight outside these (inclusive) bounds are not packed
    #[serde(default)]
    pub bounds: WeightBounds,
    /// Implementation used to scan the bins
    #[serde(default)]
    pub backend: Backend,
    /// Whether to draw the bin weights to an SVG file
    #[serde(default = "default_write_svg")]
    pub write_svg: bool,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for BinPackConfig {
    fn default() -> Self {
        Self {
            csv: CsvDialect::default(),
            bounds: WeightBounds::UNBOUNDED,
            backend: Backend::Scalar,
            write_svg: default_write_svg(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

fn default_write_svg() -> bool {
    true
}

/// Fields missing from a config file take their [`Default`] value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CsvDialect {
    /// First row holds the column names
    pub has_header: bool,
    /// Single character, or `tab`
    pub delimiter: String,
    pub quote_char: char,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self {
            has_header: false,
            delimiter: ",".to_owned(),
            quote_char: '"',
        }
    }
}

impl CsvDialect {
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_str() {
            "tab" | "\"tab\"" | "\\t" | "\t" => Ok(b'\t'),
            d if d.len() == 1 => Ok(d.as_bytes()[0]),
            d => bail!("delimiter has to be a single ASCII character or \"tab\", got {d:?}"),
        }
    }

    pub fn quote_byte(&self) -> Result<u8> {
        match self.quote_char.is_ascii() {
            true => Ok(self.quote_char as u8),
            false => bail!("quote character has to be ASCII, got {:?}", self.quote_char),
        }
    }
}
