//! Order statistics used by the corrector.
//!
//! Medians follow the textbook rule: the middle value of an odd-sized sample,
//! the mean of the two middle values of an even-sized one.

use std::collections::HashMap;

use gccorrect_core::models::Bin;

/// Scale that makes the MAD a consistent estimator of the standard deviation
/// for normally distributed data: the 0.75 quantile of the standard normal.
pub const MAD_NORMAL_CONSISTENCY: f64 = 0.6744897501960817;

/// Median of integer values, `None` when empty.
pub fn median_i64(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let median = if n % 2 == 0 {
        // summed as floats so large counts can't overflow
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    };
    Some(median)
}

/// Median of float values, `None` when empty. NaNs sort last.
pub fn median_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    Some(median)
}

/// Normal-consistent median absolute deviation:
/// `median(|x - median(x)|) / MAD_NORMAL_CONSISTENCY`.
pub fn median_absolute_deviation(values: &[i64]) -> Option<f64> {
    let center = median_i64(values)?;
    let deviations: Vec<f64> = values
        .iter()
        .map(|&v| (v as f64 - center).abs())
        .collect();

    median_f64(&deviations).map(|mad| mad / MAD_NORMAL_CONSISTENCY)
}

///
/// Median read count for each distinct GC value in a table.
///
/// Built once per correction call; every bin sharing a GC value reads the
/// same stored median.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GcMedians {
    medians: HashMap<i32, f64>,
}

impl GcMedians {
    pub fn from_bins<'a, I>(bins: I) -> Self
    where
        I: IntoIterator<Item = &'a Bin>,
    {
        let mut counts_by_gc: HashMap<i32, Vec<i64>> = HashMap::new();
        for bin in bins {
            counts_by_gc.entry(bin.gc).or_default().push(bin.counts);
        }

        let medians = counts_by_gc
            .into_iter()
            .filter_map(|(gc, counts)| median_i64(&counts).map(|median| (gc, median)))
            .collect();

        GcMedians { medians }
    }

    pub fn get(&self, gc: i32) -> Option<f64> {
        self.medians.get(&gc).copied()
    }

    /// Number of distinct GC values.
    pub fn len(&self) -> usize {
        self.medians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medians.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use statrs::distribution::{ContinuousCDF, Normal};

    fn make_bin(gc: i32, counts: i64) -> Bin {
        Bin {
            chr: "chr1".to_string(),
            start: 0,
            end: 100,
            gc,
            counts,
        }
    }

    #[rstest]
    #[case(&[48, 50, 52], 50.0)]
    #[case(&[54, 56], 55.0)]
    #[case(&[58], 58.0)]
    #[case(&[48, 50, 52, 54, 56, 58], 53.0)]
    #[case(&[58, 48, 56, 50, 54, 52], 53.0)]
    #[case(&[1, 2], 1.5)]
    #[case(&[-4, 0, 10], 0.0)]
    fn test_median_i64(#[case] values: &[i64], #[case] expected: f64) {
        assert_eq!(median_i64(values), Some(expected));
    }

    #[rstest]
    fn test_median_empty() {
        assert_eq!(median_i64(&[]), None);
        assert_eq!(median_f64(&[]), None);
        assert_eq!(median_absolute_deviation(&[]), None);
    }

    #[rstest]
    fn test_median_large_counts_do_not_overflow() {
        assert_eq!(median_i64(&[i64::MAX, i64::MAX]), Some(i64::MAX as f64));
    }

    #[rstest]
    fn test_median_f64() {
        assert_eq!(median_f64(&[3.0, 1.0, 2.0, 4.0]), Some(2.5));
    }

    #[rstest]
    fn test_mad() {
        // deviations from 53: 5, 3, 1, 1, 3, 5 -> median 3
        let mad = median_absolute_deviation(&[48, 50, 52, 54, 56, 58]).unwrap();
        assert_eq!(mad, 3.0 / MAD_NORMAL_CONSISTENCY);
    }

    #[rstest]
    fn test_mad_constant_spread_is_zero() {
        assert_eq!(median_absolute_deviation(&[7, 7, 7]), Some(0.0));
    }

    #[rstest]
    fn test_consistency_constant_matches_normal_quantile() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let quantile = normal.inverse_cdf(0.75);
        assert!((quantile - MAD_NORMAL_CONSISTENCY).abs() < 1e-9);
    }

    #[rstest]
    fn test_gc_medians() {
        let bins: Vec<Bin> = [(50, 48), (50, 50), (50, 52), (40, 54), (40, 56), (60, 58)]
            .into_iter()
            .map(|(gc, counts)| make_bin(gc, counts))
            .collect();

        let medians = GcMedians::from_bins(&bins);

        assert_eq!(medians.len(), 3);
        assert_eq!(medians.get(50), Some(50.0));
        assert_eq!(medians.get(40), Some(55.0));
        assert_eq!(medians.get(60), Some(58.0));
        assert_eq!(medians.get(45), None);
    }

    #[rstest]
    fn test_gc_medians_empty() {
        let medians = GcMedians::from_bins(&Vec::<Bin>::new());
        assert!(medians.is_empty());
    }
}
