use std::io::{BufRead, ErrorKind};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{BinTableError, Result};
use crate::models::Bin;
use crate::utils::get_dynamic_reader_w_stdin;

///
/// BinTable struct, the ordered rows of a GC/counts table file.
/// Row order is kept exactly as read.
///
#[derive(Clone, Debug, Default)]
pub struct BinTable {
    pub bins: Vec<Bin>,
    pub path: Option<PathBuf>,
}

impl BinTable {
    ///
    /// Parse a [BinTable] from any buffered reader.
    ///
    /// Blank lines are skipped. Every other line must hold exactly five
    /// tab-separated fields, otherwise the whole read fails with
    /// [BinTableError::MalformedInput].
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut bins: Vec<Bin> = Vec::new();

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            // undecodable input (bad gzip stream, invalid bytes) is a format error
            let bytes = line.map_err(|err| match err.kind() {
                ErrorKind::InvalidData | ErrorKind::InvalidInput => BinTableError::MalformedInput {
                    line: line_no,
                    reason: err.to_string(),
                },
                _ => BinTableError::Io(err),
            })?;
            let line = std::str::from_utf8(&bytes).map_err(|err| BinTableError::MalformedInput {
                line: line_no,
                reason: format!("row is not valid UTF-8: {}", err),
            })?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            let bin = line
                .parse::<Bin>()
                .map_err(|reason| BinTableError::MalformedInput {
                    line: line_no,
                    reason,
                })?;
            bins.push(bin);
        }

        Ok(BinTable { bins, path: None })
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    ///
    /// Distinct bin widths, in the order they first appear.
    ///
    pub fn bin_widths(&self) -> Vec<u32> {
        let mut widths: Vec<u32> = Vec::new();
        for bin in &self.bins {
            let width = bin.width();
            if !widths.contains(&width) {
                widths.push(width);
            }
        }
        widths
    }

    ///
    /// True when every bin has the same width (trivially true for empty tables).
    ///
    pub fn has_uniform_width(&self) -> bool {
        self.bin_widths().len() <= 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }
}

impl TryFrom<&Path> for BinTable {
    type Error = BinTableError;

    ///
    /// Create a new [BinTable] from a counts file.
    ///
    /// # Arguments:
    /// - value: path to the file on disk (optionally gzipped), or `-` for stdin.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader_w_stdin(value)?;
        let mut table = BinTable::from_reader(reader)?;
        table.path = Some(value.to_owned());

        debug!("Input file {} loaded", value.display());

        Ok(table)
    }
}

impl TryFrom<&str> for BinTable {
    type Error = BinTableError;

    fn try_from(value: &str) -> Result<Self> {
        BinTable::try_from(Path::new(value))
    }
}

impl TryFrom<String> for BinTable {
    type Error = BinTableError;

    fn try_from(value: String) -> Result<Self> {
        BinTable::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for BinTable {
    type Error = BinTableError;

    fn try_from(value: PathBuf) -> Result<Self> {
        BinTable::try_from(value.as_path())
    }
}

impl From<Vec<Bin>> for BinTable {
    fn from(bins: Vec<Bin>) -> Self {
        BinTable { bins, path: None }
    }
}

impl<'a> IntoIterator for &'a BinTable {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}
