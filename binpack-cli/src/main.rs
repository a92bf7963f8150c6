use anyhow::Result;
use binpack_cli::config::BinPackConfig;
use binpack_cli::io;
use binpack_cli::io::cli::Cli;
use binpack_cli::pipeline::{PackRequest, default_solution_folder, run};
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BinPackConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    let config = args.overlay(config);

    info!("[MAIN] Successfully parsed BinPackConfig: {config:?}");

    let request = PackRequest {
        mode: args.mode()?,
        solution_folder: args
            .solution_folder
            .clone()
            .unwrap_or_else(|| default_solution_folder(&args.input_file)),
        input_file: args.input_file,
        weight_column: args.weight_column,
        config,
    };

    let report = run(&request)?;
    print!("{}", report.table);

    info!(
        "[MAIN] {} bins written to {}",
        report.bin_files.len(),
        request.solution_folder.display()
    );

    Ok(())
}
