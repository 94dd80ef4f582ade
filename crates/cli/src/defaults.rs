//! Shared default values for projection configuration.
//! These values are used by the `run`, `matrix`, and `export` commands (via clap).

pub const PAIRS: &str = "AAxAA,AAxAA,AAxAA";
pub const INITIAL: &str = "1.0,0.0,0.0";
pub const GENERATIONS: i32 = 10;
pub const STRATEGY: &str = "diagonalization";
pub const EXPORT_FORMAT: &str = "csv";

/// Decimal places used by the final distribution summary.
pub const SUMMARY_PRECISION: usize = 2;

/// Tolerance for warning when the initial frequencies do not sum to 1.
pub const SUM_WARNING_TOLERANCE: f64 = 1e-9;
