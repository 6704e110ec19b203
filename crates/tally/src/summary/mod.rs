//! Numeric coercion and per-column summary statistics.

mod column;
mod numeric;

pub use column::{ColumnSummary, NumericAccumulator, summarize_column, summarize_table};
pub use numeric::{is_numeric, parse_number};
