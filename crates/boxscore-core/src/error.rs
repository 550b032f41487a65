//! Error types for boxscore core.

use thiserror::Error;

use crate::roster::Team;

/// Errors that surface at the library boundary.
///
/// Bad notation and unresolved players inside a game are never errors;
/// only malformed inputs handed to the API are.
#[derive(Error, Debug)]
pub enum BoxscoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid {team} at-bat grid: {message}")]
    GridShape { team: Team, message: String },

    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    #[error("Invalid game file: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No players on the {0} roster")]
    EmptyRoster(Team),
}

pub type Result<T> = std::result::Result<T, BoxscoreError>;
