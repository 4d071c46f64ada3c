use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;

use crate::consts::CORRECTED_BIN_COLUMNS;
use crate::models::Bin;
use crate::utils::format_corrected;

///
/// A [Bin] together with its GC-corrected read depth.
///
#[derive(PartialEq, Debug, Clone)]
pub struct CorrectedBin {
    pub bin: Bin,
    pub corrected: f64,
}

impl CorrectedBin {
    pub fn as_string(&self) -> String {
        format!("{}\t{}", self.bin.as_string(), format_corrected(self.corrected))
    }
}

impl Display for CorrectedBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// The output table: input rows in their original order, each with a corrected value.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorrectedBinTable {
    pub bins: Vec<CorrectedBin>,
}

impl CorrectedBinTable {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Column count of the table schema, independent of the row count.
    pub fn n_columns(&self) -> usize {
        CORRECTED_BIN_COLUMNS
    }

    pub fn corrected_values(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.corrected).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorrectedBin> {
        self.bins.iter()
    }

    ///
    /// Write all rows, tab-delimited and without a header, to any writer.
    ///
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for bin in &self.bins {
            writeln!(writer, "{}", bin.as_string())?;
        }
        writer.flush()
    }

    ///
    /// Save the table to disk as a plain tab-delimited file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn to_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Saving results to {}", path.display());

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)
    }

    ///
    /// Save the table to disk as a gzip-compressed tab-delimited file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn to_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Saving compressed results to {}", path.display());

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        self.write_to(&mut encoder)?;
        encoder.finish()?.flush()
    }
}

impl From<Vec<CorrectedBin>> for CorrectedBinTable {
    fn from(bins: Vec<CorrectedBin>) -> Self {
        CorrectedBinTable { bins }
    }
}

impl<'a> IntoIterator for &'a CorrectedBinTable {
    type Item = &'a CorrectedBin;
    type IntoIter = std::slice::Iter<'a, CorrectedBin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}
