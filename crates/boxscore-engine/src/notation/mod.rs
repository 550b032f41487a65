//! At-bat shorthand notation.
//!
//! - [`parse_notation`] - Turn one scoresheet cell into an [`AtBatOutcome`]
//! - [`AtBatOutcome`] - The only contract between parsing and stat replay

mod outcome;
mod parse;

pub use outcome::AtBatOutcome;
pub use parse::parse_notation;
