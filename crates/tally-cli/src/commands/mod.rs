//! CLI command implementations.

pub mod grades;
pub mod organize;
pub mod report;
pub mod sales;
