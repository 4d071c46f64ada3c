use log::{debug, warn};

use gccorrect_core::consts::ZERO_MEDIAN_FALLBACK;
use gccorrect_core::models::{Bin, BinTable, CorrectedBin, CorrectedBinTable};

use crate::statistics::{GcMedians, median_absolute_deviation, median_i64};

///
/// Diagnostics gathered while correcting a table. None of these values other
/// than `median_all` take part in the corrected counts.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionSummary {
    pub n_bins: usize,
    /// Median of all raw counts, `None` for an empty table.
    pub median_all: Option<f64>,
    /// Normal-consistent MAD of all raw counts, `None` for an empty table.
    pub mad_all: Option<f64>,
    /// Number of distinct GC values.
    pub n_gc_groups: usize,
    pub uniform_width: bool,
}

///
/// Corrected count of one bin given the global median and its GC group median.
///
/// A zero group median yields [ZERO_MEDIAN_FALLBACK]. Negative counts are not
/// rejected; they go through the same ratio and produce negative values.
///
pub fn corrected_count(counts: i64, median_all: f64, median_gc: f64) -> f64 {
    if median_gc != 0.0 {
        counts as f64 * median_all / median_gc
    } else {
        ZERO_MEDIAN_FALLBACK
    }
}

///
/// Remove the GC-content dependency of read depth from every bin of a table.
///
/// Each bin's count is rescaled by the ratio of the global median count to the
/// median count of bins sharing its GC value. Row order is preserved. An empty
/// table gives an empty result.
///
pub fn correct(table: BinTable) -> CorrectedBinTable {
    correct_with_summary(table).0
}

///
/// Same as [correct], also returning the diagnostics computed along the way.
///
pub fn correct_with_summary(table: BinTable) -> (CorrectedBinTable, CorrectionSummary) {
    if table.is_empty() {
        debug!("Input file is empty!");
        let summary = CorrectionSummary {
            n_bins: 0,
            median_all: None,
            mad_all: None,
            n_gc_groups: 0,
            uniform_width: true,
        };
        return (CorrectedBinTable::default(), summary);
    }

    let widths = table.bin_widths();
    let uniform_width = widths.len() == 1;
    if !uniform_width {
        warn!("Bins of different sizes: {:?}", widths);
    }

    let counts: Vec<i64> = table.iter().map(|bin| bin.counts).collect();
    let median_all = median_i64(&counts);
    let mad_all = median_absolute_deviation(&counts);
    let gc_medians = GcMedians::from_bins(&table);

    debug!("Median of counts over all bins: {:?}", median_all);
    debug!("MAD of counts over all bins: {:?}", mad_all);
    debug!("Calculating corrected reads depth values over bins");

    let summary = CorrectionSummary {
        n_bins: table.len(),
        median_all,
        mad_all,
        n_gc_groups: gc_medians.len(),
        uniform_width,
    };

    // the table is non-empty, so both statistics exist for every bin
    let median_all = median_all.unwrap_or_default();
    let bins: Vec<CorrectedBin> = table
        .bins
        .into_iter()
        .map(|bin: Bin| {
            let median_gc = gc_medians.get(bin.gc).unwrap_or_default();
            let corrected = corrected_count(bin.counts, median_all, median_gc);
            CorrectedBin { bin, corrected }
        })
        .collect();

    (CorrectedBinTable::from(bins), summary)
}
