/// Number of columns in an input bin row: chromosome, start, stop, gc, counts.
pub const BIN_COLUMNS: usize = 5;

/// Number of columns in a corrected row (input columns plus the corrected value).
pub const CORRECTED_BIN_COLUMNS: usize = BIN_COLUMNS + 1;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Value emitted for bins whose GC group has a zero median.
pub const ZERO_MEDIAN_FALLBACK: f64 = 1.0;

/// Corrected values at or above this magnitude are written in exponent form.
pub const EXPONENT_THRESHOLD: f64 = 1e16;
