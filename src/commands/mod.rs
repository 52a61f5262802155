//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, PositionStat, analyze_number};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{Outcome, run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_number};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
