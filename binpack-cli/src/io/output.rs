use binpack::io::ext_repr::ExtSolution;
use serde::{Deserialize, Serialize};

use crate::config::BinPackConfig;
use crate::pipeline::PackMode;

/// Contents of the `sol_{stem}.json` file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PackOutput {
    pub input_file: String,
    /// Resolved position of the weight column
    pub weight_column: usize,
    pub mode: PackMode,
    pub solution: ExtSolution,
    pub config: BinPackConfig,
}
