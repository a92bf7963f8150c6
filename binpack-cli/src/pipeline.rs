use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use binpack::io::ext_repr::ExtSolution;
use binpack::probs::Solution;
use binpack::probs::cbnp::CBNPacker;
use binpack::probs::cvp::CVPacker;
use binpack::source::{ItemSource, Normalized, WeightExtractor};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::BinPackConfig;
use crate::io;
use crate::io::csv_input::{CsvTable, WeightColumn};
use crate::io::output::PackOutput;
use crate::io::svg_export::bins_to_svg;
use crate::io::{csv_input, csv_output, report};

/// Which of the two quantities is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackMode {
    ConstantVolume { max_volume: f64 },
    ConstantBinNumber { n_bins: usize },
}

#[derive(Debug, Clone)]
pub struct PackRequest {
    pub input_file: PathBuf,
    pub weight_column: WeightColumn,
    pub mode: PackMode,
    pub solution_folder: PathBuf,
    pub config: BinPackConfig,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct PackReport {
    /// Bin size table, see [`report::bin_size_table`]
    pub table: String,
    pub bin_files: Vec<PathBuf>,
    pub solution_file: PathBuf,
    pub svg_file: Option<PathBuf>,
    pub solution: ExtSolution,
}

/// Folder of the input file, or the working directory for a bare file name.
pub fn default_solution_folder(input_file: &Path) -> PathBuf {
    match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Loads the CSV file, packs its rows and writes the bins, the JSON solution and (optionally) the SVG chart.
pub fn run(request: &PackRequest) -> Result<PackReport> {
    let start = Instant::now();
    let config = &request.config;

    let CsvTable {
        header,
        rows,
        weight_column,
    } = csv_input::load_csv(&request.input_file, &request.weight_column, &config.csv)?;
    let n_rows = rows.len();

    let normalized = ItemSource::records(rows, WeightExtractor::position(weight_column))
        .normalize(config.bounds)
        .with_context(|| format!("invalid weights in {}", request.input_file.display()))?;

    info!(
        "[PIPE] {} of {} rows within bounds {:?}, packing with {:?}",
        normalized.items().len(),
        n_rows,
        config.bounds,
        request.mode
    );

    let artifacts = Artifacts {
        request,
        header,
        weight_column,
        start,
    };

    match request.mode {
        PackMode::ConstantVolume { max_volume } => {
            let solution = CVPacker::new(max_volume)?
                .with_backend(config.backend)
                .pack(normalized.items());
            info!("[PIPE] bins filled to {:.2}% on average", 100.0 * solution.fill_ratio());
            artifacts.write(&solution, Some(max_volume), normalized)
        }
        PackMode::ConstantBinNumber { n_bins } => {
            let solution = CBNPacker::new(n_bins)?
                .with_backend(config.backend)
                .pack(normalized.items());
            artifacts.write(&solution, None, normalized)
        }
    }
}

struct Artifacts<'a> {
    request: &'a PackRequest,
    header: Option<Vec<String>>,
    weight_column: usize,
    start: Instant,
}

impl Artifacts<'_> {
    fn write(
        self,
        solution: &impl Solution,
        capacity: Option<f64>,
        normalized: Normalized<(), Vec<String>>,
    ) -> Result<PackReport> {
        let request = self.request;
        let config = &request.config;
        let folder = &request.solution_folder;

        let input_stem = request
            .input_file
            .file_stem()
            .and_then(OsStr::to_str)
            .with_context(|| format!("invalid input file name: {}", request.input_file.display()))?;
        let input_ext = request.input_file.extension().and_then(OsStr::to_str);

        if !folder.exists() {
            fs::create_dir_all(folder)
                .with_context(|| format!("could not create solution folder: {}", folder.display()))?;
        }

        let table = report::bin_size_table(solution);
        info!("[PIPE] bin sizes:\n{table}");

        let ext_solution = binpack::io::export(solution, Some(self.start.elapsed()));

        let solution_file = folder.join(format!("sol_{input_stem}.json"));
        {
            let output = PackOutput {
                input_file: request.input_file.display().to_string(),
                weight_column: self.weight_column,
                mode: request.mode,
                solution: ext_solution.clone(),
                config: config.clone(),
            };
            io::write_json(&output, &solution_file)?;
        }

        let svg_file = match config.write_svg {
            true => {
                let svg_file = folder.join(format!("sol_{input_stem}.svg"));
                let svg = bins_to_svg(solution.bins(), capacity, config.svg_draw_options, input_stem);
                io::write_svg(&svg, &svg_file)?;
                Some(svg_file)
            }
            false => None,
        };

        let packed_rows = normalized
            .reassemble(solution.bins())
            .into_records()
            .context("packed bins lost their rows")?;

        let bin_files = csv_output::save_csvs(
            &packed_rows,
            self.header.as_deref(),
            folder,
            input_stem,
            input_ext,
            &config.csv,
        )?;

        Ok(PackReport {
            table,
            bin_files,
            solution_file,
            svg_file,
            solution: ext_solution,
        })
    }
}
