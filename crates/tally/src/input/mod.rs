//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{
    DEFAULT_DELIMITER, Parser, ParserConfig, SNIFF_BYTES, detect_delimiter, parse_delimiter,
    sniff_delimiter,
};
pub use source::{DataTable, SourceMetadata, format_name};
