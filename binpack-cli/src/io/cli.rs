use std::path::PathBuf;

use anyhow::{Result, bail};
use binpack::util::Backend;
use clap::{ArgAction, ArgGroup, Parser};
use log::LevelFilter;

use crate::config::BinPackConfig;
use crate::io::csv_input::WeightColumn;
use crate::pipeline::PackMode;

/// Distributes the rows of a CSV file over bins, based on a weight column.
/// Either the volume of the bins (`-V`) or the number of bins (`-N`) is fixed.
#[derive(Parser, Debug)]
#[command(author, version, about, disable_version_flag = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["volume", "n_bins"])))]
pub struct Cli {
    #[arg(short = 'f', long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Fixed volume of every bin
    #[arg(short = 'V', long, value_name = "VOLUME")]
    pub volume: Option<f64>,
    /// Fixed number of bins
    #[arg(short = 'N', long = "n-bins", value_name = "N")]
    pub n_bins: Option<usize>,
    /// Column holding the weights, either a zero-based index or a header name
    #[arg(short = 'c', long, value_name = "INDEX|NAME")]
    pub weight_column: WeightColumn,
    /// The first row of the file is a header
    #[arg(short = 'H', long)]
    pub has_header: bool,
    /// Field delimiter, `tab` for tab separated files
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,
    #[arg(short, long, value_name = "CHAR")]
    pub quote_char: Option<char>,
    /// Rows with a lower weight are left out
    #[arg(short, long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub lower_bound: Option<f64>,
    /// Rows with a higher weight are left out
    #[arg(short, long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub upper_bound: Option<f64>,
    /// Defaults to the folder of the input file
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    /// Scan the bins with the parallel backend
    #[arg(short, long)]
    pub accelerate: bool,
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    pub fn mode(&self) -> Result<PackMode> {
        match (self.volume, self.n_bins) {
            (Some(v), None) => Ok(PackMode::ConstantVolume { max_volume: v }),
            (None, Some(n)) => Ok(PackMode::ConstantBinNumber { n_bins: n }),
            (None, None) => bail!("Neither `--volume` nor `--n-bins` was given"),
            (Some(_), Some(_)) => bail!("Both `--volume` and `--n-bins` were given, pick one"),
        }
    }

    /// Applies the flags which were given on the command line on top of `config`.
    pub fn overlay(&self, mut config: BinPackConfig) -> BinPackConfig {
        config.csv.has_header |= self.has_header;
        if let Some(delimiter) = &self.delimiter {
            config.csv.delimiter = delimiter.clone();
        }
        if let Some(quote_char) = self.quote_char {
            config.csv.quote_char = quote_char;
        }
        if self.lower_bound.is_some() {
            config.bounds.lower = self.lower_bound;
        }
        if self.upper_bound.is_some() {
            config.bounds.upper = self.upper_bound;
        }
        if self.accelerate {
            config.backend = Backend::Parallel;
        }
        config
    }
}
