use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{EXPONENT_THRESHOLD, STDIN_PATH};
use crate::errors::{BinTableError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// Anything that is not an existing regular file (a missing path, a directory),
/// or a file that can't be opened, is reported as [BinTableError::SourceNotFound].
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    if !path.is_file() {
        return Err(BinTableError::SourceNotFound(path.to_owned()));
    }

    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file =
        File::open(path).map_err(|_| BinTableError::SourceNotFound(path.to_owned()))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    if path == Path::new(STDIN_PATH) {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(path)
    }
}

///
/// Render a corrected value the way tabular float output conventionally looks:
/// shortest round-trip digits, with integral values keeping one decimal place
/// and magnitudes from [EXPONENT_THRESHOLD] up written as `1e+16`.
///
pub fn format_corrected(value: f64) -> String {
    if value.is_finite() && value.abs() >= EXPONENT_THRESHOLD {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    #[rstest]
    fn test_missing_file_is_source_not_found() {
        let result = get_dynamic_reader(Path::new("wrong_file_name.txt"));
        assert!(matches!(result, Err(BinTableError::SourceNotFound(_))));
    }

    #[rstest]
    fn test_directory_is_source_not_found() {
        let dir = tempdir().unwrap();
        let result = get_dynamic_reader(dir.path());
        assert!(matches!(result, Err(BinTableError::SourceNotFound(_))));
    }

    #[rstest]
    fn test_reads_gzipped_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("counts.txt.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"chr1\t0\t100\t50\t48\n").unwrap();
        encoder.finish().unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["chr1\t0\t100\t50\t48".to_string()]);
    }

    #[rstest]
    #[case(53.0, "53.0")]
    #[case(1.0, "1.0")]
    #[case(50.88, "50.88")]
    #[case(-2.5, "-2.5")]
    #[case(1e15, "1000000000000000.0")]
    #[case(1e16, "1e+16")]
    #[case(1.5e16, "1.5e+16")]
    #[case(1e300, "1e+300")]
    #[case(-2e20, "-2e+20")]
    fn test_format_corrected(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_corrected(value), expected);
    }

    #[rstest]
    #[cfg(unix)]
    fn test_unreadable_file_is_source_not_found() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("counts.txt");
        std::fs::write(&path, "chr1\t0\t100\t50\t48\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // permission bits don't apply to a privileged user
        if File::open(&path).is_ok() {
            return;
        }

        let result = get_dynamic_reader(&path);
        assert!(matches!(result, Err(BinTableError::SourceNotFound(_))));
    }

    #[rstest]
    fn test_stdin_marker_skips_file_checks() {
        assert!(get_dynamic_reader_w_stdin(Path::new(STDIN_PATH)).is_ok());
    }
}
