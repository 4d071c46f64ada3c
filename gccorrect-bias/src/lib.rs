//! GC-bias correction of binned read depth.
//!
//! Sequencing depth over a genomic bin depends systematically on the bin's GC content.
//! This crate removes that dependency by median normalization per GC value:
//!
//! - the median of all raw counts is computed once per table
//! - the median of raw counts is computed for each distinct GC value
//! - each bin's count is rescaled by `median_all / median_gc`, or set to `1.0`
//!   when its GC group median is zero
//!
//! # Example
//!
//! ```no_run
//! use gccorrect_bias::correct;
//! use gccorrect_core::models::BinTable;
//!
//! let table = BinTable::try_from("counts.txt").unwrap();
//! let corrected = correct(table);
//!
//! corrected.to_tsv("corrected.txt").unwrap();
//! ```

pub mod corrector;
pub mod statistics;

// re-exports
pub use corrector::{CorrectionSummary, correct, correct_with_summary, corrected_count};
pub use statistics::GcMedians;
