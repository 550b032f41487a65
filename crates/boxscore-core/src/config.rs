//! Game files: where the at-bats live and who played.
//!
//! ```toml
//! [sheet]
//! path = "game.csv"
//! away_grid = "C3:K11"
//! home_grid = "C15:K23"
//!
//! [away]
//! name = "Visitors"
//!
//! [[away.players]]
//! name = "A. Smith"
//! order = 1
//! trail = "LF <- SP"
//! ```

use boxscore_engine::{CellRange, PositionHistory};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{BoxscoreError, Result};
use crate::roster::{BATTING_ORDER_SLOTS, Roster, Team};
use crate::sheet::ScoreSheet;
use crate::storage::parse_csv;

const MAX_GAME_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameFile {
    sheet: SheetSection,
    away: TeamSection,
    home: TeamSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SheetSection {
    path: PathBuf,
    away_grid: String,
    home_grid: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TeamSection {
    name: Option<String>,
    #[serde(default)]
    players: Vec<PlayerEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlayerEntry {
    name: String,
    /// One-based batting slot.
    order: Option<usize>,
    positions: Option<Vec<String>>,
    trail: Option<String>,
}

/// A parsed game file.
#[derive(Debug)]
pub struct GameConfig {
    pub sheet_path: PathBuf,
    pub away_grid: CellRange,
    pub home_grid: CellRange,
    pub roster: Roster,
}

impl GameConfig {
    /// Parse game file contents. A relative sheet path is kept as written.
    pub fn parse(content: &str) -> Result<GameConfig> {
        let file: GameFile = toml::from_str(content)?;

        let away_grid = parse_team_region(Team::Away, &file.sheet.away_grid)?;
        let home_grid = parse_team_region(Team::Home, &file.sheet.home_grid)?;

        let mut roster = Roster::new();
        for (team, section) in [(Team::Away, &file.away), (Team::Home, &file.home)] {
            if let Some(name) = &section.name {
                roster.set_team_name(team, name);
            }
            for entry in &section.players {
                let slot = match entry.order {
                    Some(order) if (1..=BATTING_ORDER_SLOTS).contains(&order) => Some(order - 1),
                    Some(order) => {
                        return Err(BoxscoreError::Config(format!(
                            "{}: batting order {} is outside 1..={}",
                            entry.name, order, BATTING_ORDER_SLOTS
                        )));
                    }
                    None => None,
                };
                let history = match (&entry.positions, &entry.trail) {
                    (Some(_), Some(_)) => {
                        return Err(BoxscoreError::Config(format!(
                            "{}: set either positions or trail, not both",
                            entry.name
                        )));
                    }
                    (Some(positions), None) => positions.iter().collect(),
                    (None, Some(trail)) => PositionHistory::from_trail(trail),
                    (None, None) => PositionHistory::new(),
                };
                roster.add_player(team, &entry.name, slot, history);
            }
        }

        Ok(GameConfig {
            sheet_path: file.sheet.path,
            away_grid,
            home_grid,
            roster,
        })
    }

    /// Load a game file. The sheet path is resolved against the game file's directory.
    pub fn load(path: &Path) -> Result<GameConfig> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_GAME_FILE_BYTES {
            return Err(BoxscoreError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Refusing to read {}: game file too large ({} bytes, max {})",
                    path.display(),
                    meta.len(),
                    MAX_GAME_FILE_BYTES
                ),
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if config.sheet_path.is_relative()
            && let Some(dir) = path.parent()
        {
            config.sheet_path = dir.join(&config.sheet_path);
        }
        Ok(config)
    }

    /// Read the scoresheet CSV and bind it to the team regions.
    pub fn open_score_sheet(&self) -> Result<ScoreSheet> {
        let sheet = parse_csv(&self.sheet_path)?;
        Ok(ScoreSheet::new(sheet, self.away_grid, self.home_grid))
    }
}

/// A team region has one row per batting-order slot at most.
fn parse_team_region(team: Team, range: &str) -> Result<CellRange> {
    let region =
        CellRange::parse(range).ok_or_else(|| BoxscoreError::InvalidRange(range.to_string()))?;
    if region.rows() > BATTING_ORDER_SLOTS {
        return Err(BoxscoreError::Config(format!(
            "{} grid {} has {} rows, but only {} batting-order slots",
            team,
            region,
            region.rows(),
            BATTING_ORDER_SLOTS
        )));
    }
    Ok(region)
}
