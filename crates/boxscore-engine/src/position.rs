//! Fielding positions and per-player position histories.
//!
//! Position tokens are what the scorer writes in the roster ("SS", "LF",
//! "SP", "RP2"). Pitchers are tagged by their order of appearance: "SP" is
//! the starter, "RP<n>" the n-th reliever.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    StartingPitcher,
    ReliefPitcher(usize),
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
    Other(String),
}

impl Position {
    /// Parse a roster position token. Unknown tokens are kept as [`Position::Other`].
    pub fn parse(token: &str) -> Position {
        let token = token.trim().to_ascii_uppercase();
        match token.as_str() {
            "SP" => Position::StartingPitcher,
            "P" => Position::Pitcher,
            "C" => Position::Catcher,
            "1B" => Position::FirstBase,
            "2B" => Position::SecondBase,
            "3B" => Position::ThirdBase,
            "SS" => Position::Shortstop,
            "LF" => Position::LeftField,
            "CF" => Position::CenterField,
            "RF" => Position::RightField,
            "DH" => Position::DesignatedHitter,
            _ => match token.strip_prefix("RP").map(str::parse::<usize>) {
                Some(Ok(n)) => Position::ReliefPitcher(n),
                _ => Position::Other(token),
            },
        }
    }

    /// Scorebook number (1 = pitcher .. 9 = right field).
    pub fn number(&self) -> Option<u8> {
        match self {
            Position::StartingPitcher | Position::ReliefPitcher(_) | Position::Pitcher => Some(1),
            Position::Catcher => Some(2),
            Position::FirstBase => Some(3),
            Position::SecondBase => Some(4),
            Position::ThirdBase => Some(5),
            Position::Shortstop => Some(6),
            Position::LeftField => Some(7),
            Position::CenterField => Some(8),
            Position::RightField => Some(9),
            Position::DesignatedHitter | Position::Other(_) => None,
        }
    }

    /// Slot in the team's pitcher timeline: 0 for the starter, n for "RP<n>".
    pub fn pitcher_slot(&self) -> Option<usize> {
        match self {
            Position::StartingPitcher => Some(0),
            Position::ReliefPitcher(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::StartingPitcher => write!(f, "SP"),
            Position::ReliefPitcher(n) => write!(f, "RP{}", n),
            Position::Pitcher => write!(f, "P"),
            Position::Catcher => write!(f, "C"),
            Position::FirstBase => write!(f, "1B"),
            Position::SecondBase => write!(f, "2B"),
            Position::ThirdBase => write!(f, "3B"),
            Position::Shortstop => write!(f, "SS"),
            Position::LeftField => write!(f, "LF"),
            Position::CenterField => write!(f, "CF"),
            Position::RightField => write!(f, "RF"),
            Position::DesignatedHitter => write!(f, "DH"),
            Position::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Position::parse(&s)
    }
}

impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.to_string()
    }
}

/// Separators accepted in a current-first annotation trail.
const TRAIL_SEPARATORS: &[&str] = &["<-", "->", "←", "→", ">", ","];

/// Positions a player has held, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionHistory(Vec<Position>);

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move to `position`. Re-recording the current position is a no-op.
    pub fn push(&mut self, position: Position) {
        if self.current() != Some(&position) {
            self.0.push(position);
        }
    }

    /// Build a history from a trail written newest first, e.g. `"LF <- RP2 <- 2B"`.
    pub fn from_trail(trail: &str) -> Self {
        let mut normalized = trail.to_string();
        for sep in TRAIL_SEPARATORS {
            normalized = normalized.replace(sep, "|");
        }
        let mut history = PositionHistory::new();
        for token in normalized.rsplit('|').map(str::trim).filter(|t| !t.is_empty()) {
            history.push(Position::parse(token));
        }
        history
    }

    /// The most recent position, if any.
    pub fn current(&self) -> Option<&Position> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PositionHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = PositionHistory::new();
        for token in iter {
            history.push(Position::parse(token.as_ref()));
        }
        history
    }
}

impl fmt::Display for PositionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", tokens.join("-"))
    }
}
