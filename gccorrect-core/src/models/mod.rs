pub mod bin;
pub mod bin_table;
pub mod corrected;

// re-export for cleaner imports
pub use self::bin::Bin;
pub use self::bin_table::BinTable;
pub use self::corrected::{CorrectedBin, CorrectedBinTable};
