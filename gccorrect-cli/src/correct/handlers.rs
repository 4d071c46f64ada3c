use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use gccorrect_bias::correct_with_summary;
use gccorrect_core::models::{BinTable, CorrectedBinTable};

use super::cli::{COUNTS_ARG, OUTPUT_ARG};

pub fn run_correct(matches: &ArgMatches) -> Result<()> {
    let counts = matches
        .get_one::<String>(COUNTS_ARG)
        .expect("A path to a counts file is required.");

    let output = matches.get_one::<String>(OUTPUT_ARG).map(Path::new);

    let table = BinTable::try_from(Path::new(counts))
        .with_context(|| format!("Failed to load counts from {}", counts))?;

    let (corrected, summary) = correct_with_summary(table);
    debug!(
        "Corrected {} bins across {} GC values",
        summary.n_bins, summary.n_gc_groups
    );

    let stdout = io::stdout();
    write_corrected(&corrected, output, BufWriter::new(stdout.lock()))
}

///
/// Write the corrected table to a file (gzipped when the name ends in `.gz`)
/// or to `fallback` (stdout from the CLI) when no output is given.
///
pub fn write_corrected<W: Write>(
    corrected: &CorrectedBinTable,
    output: Option<&Path>,
    mut fallback: W,
) -> Result<()> {
    match output {
        Some(path) if path.extension() == Some(OsStr::new("gz")) => corrected
            .to_tsv_gz(path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        Some(path) => corrected
            .to_tsv(path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => corrected.write_to(&mut fallback)?,
    }

    Ok(())
}
