use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::BIN_COLUMNS;

///
/// Bin struct, one fixed-size genomic interval with its GC value and raw read count
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Bin {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub gc: i32,
    pub counts: i64,
}

impl Bin {
    ///
    /// Get length of the bin
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get file string of Bin
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.gc, self.counts
        )
    }
}

impl FromStr for Bin {
    type Err = String;

    ///
    /// Parse one tab-delimited row: chromosome, start, stop, gc, counts.
    ///
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split('\t').collect();

        if parts.len() != BIN_COLUMNS {
            return Err(format!(
                "expected {} tab-separated fields, found {}",
                BIN_COLUMNS,
                parts.len()
            ));
        }

        let start: u32 = parts[1]
            .parse()
            .map_err(|_| format!("can't parse start position: {:?}", parts[1]))?;
        let end: u32 = parts[2]
            .parse()
            .map_err(|_| format!("can't parse stop position: {:?}", parts[2]))?;
        let gc: i32 = parts[3]
            .parse()
            .map_err(|_| format!("can't parse GC value: {:?}", parts[3]))?;
        let counts: i64 = parts[4]
            .parse()
            .map_err(|_| format!("can't parse counts: {:?}", parts[4]))?;

        if end <= start {
            return Err(format!(
                "stop ({}) must be greater than start ({})",
                end, start
            ));
        }

        Ok(Bin {
            chr: parts[0].to_string(),
            start,
            end,
            gc,
            counts,
        })
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_bin() {
        let bin: Bin = "chr1\t0\t100\t50\t48".parse().unwrap();
        assert_eq!(
            bin,
            Bin {
                chr: "chr1".to_string(),
                start: 0,
                end: 100,
                gc: 50,
                counts: 48,
            }
        );
        assert_eq!(bin.width(), 100);
    }

    #[rstest]
    fn test_parse_negative_counts() {
        let bin: Bin = "chr1\t0\t100\t50\t-3".parse().unwrap();
        assert_eq!(bin.counts, -3);
    }

    #[rstest]
    #[case("chr1\t0\t100\t50")]
    #[case("chr1\t0\t100\t50\t48\textra")]
    #[case("chr1\tzero\t100\t50\t48")]
    #[case("chr1\t0\t100\t50.5\t48")]
    #[case("chr1\t0\t100\t50\tmany")]
    #[case("chr1\t100\t100\t50\t48")]
    #[case("chr1\t200\t100\t50\t48")]
    fn test_parse_malformed(#[case] line: &str) {
        assert!(line.parse::<Bin>().is_err());
    }

    #[rstest]
    fn test_as_string_round_trips_line() {
        let line = "sequence\t100\t200\t40\t54";
        let bin: Bin = line.parse().unwrap();
        assert_eq!(bin.to_string(), line);
    }
}
