//! Storage module for scoresheet CSV import and box-score export

mod csv;
mod md;

pub use csv::{parse_csv, parse_csv_str, write_csv};
pub use md::write_markdown;
