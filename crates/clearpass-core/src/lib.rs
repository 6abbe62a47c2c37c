pub mod error;
pub mod ratios;
pub mod statement;
pub mod types;

pub use error::ClearpassError;
pub use ratios::benchmarks::{benchmark_for, industries, Benchmark};
pub use ratios::engine::{compute_ratios, RatioSet};
pub use statement::basics::Basics;
pub use statement::parser::{parse_statement, StatementOutput};
pub use statement::vocabulary::{CanonicalField, FieldVocabulary};
pub use types::*;

/// Standard result type for all clearpass operations
pub type ClearpassResult<T> = Result<T, ClearpassError>;
