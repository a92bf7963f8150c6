use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::CsvDialect;

/// Writes every bin to its own CSV file in `folder`, named `{stem}_{i}.{ext}`.
/// The bin index is zero-padded to the number of digits of the bin count, the header (if any)
/// is repeated in every file. Returns the paths of the written files, in bin order.
pub fn save_csvs(
    bins: &[Vec<Vec<String>>],
    header: Option<&[String]>,
    folder: &Path,
    stem: &str,
    ext: Option<&str>,
    dialect: &CsvDialect,
) -> Result<Vec<PathBuf>> {
    let width = bins.len().to_string().len();

    let paths = bins
        .iter()
        .enumerate()
        .map(|(i, rows)| {
            let path = folder.join(bin_file_name(stem, ext, i, width));
            write_bin(rows, header, &path, dialect)?;
            debug!("[CSV] bin {i} ({} rows) written to {}", rows.len(), path.display());
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    info!("[CSV] {} bin files written to {}", paths.len(), folder.display());
    Ok(paths)
}

pub fn bin_file_name(stem: &str, ext: Option<&str>, index: usize, width: usize) -> String {
    match ext {
        Some(ext) => format!("{stem}_{index:0width$}.{ext}"),
        None => format!("{stem}_{index:0width$}"),
    }
}

fn write_bin(rows: &[Vec<String>], header: Option<&[String]>, path: &Path, dialect: &CsvDialect) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(dialect.delimiter_byte()?)
        .quote(dialect.quote_byte()?)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("could not create bin file: {}", path.display()))?;

    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("could not write bin file: {}", path.display()))
}
