//! # Core models for GC-bias correction of binned read depth.
//!
//! This crate holds the table types shared by the rest of the workspace: a [models::Bin] is one
//! fixed-size genomic interval with its GC value and raw read count, a [models::BinTable] is the
//! ordered collection of bins read from a tab-delimited file, and a [models::CorrectedBinTable]
//! is the same rows with a corrected count appended.
//!
//! Reading handles plain, gzipped, and stdin (`-`) sources. A path that is not a readable file
//! is reported as [errors::BinTableError::SourceNotFound], distinct from a malformed row.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{BinTableError, Result};
