//! boxscore-core - Game replay, rosters, scoresheets and box-score export.

pub mod config;
pub mod error;
pub mod replay;
pub mod report;
pub mod roster;
pub mod sheet;
pub mod stats;
pub mod storage;
pub mod timeline;

pub use config::GameConfig;
pub use error::{BoxscoreError, Result};
pub use replay::{GameReplay, ReplayState, TeamReplay, replay_game, replay_team};
pub use roster::{Player, PlayerId, Roster, RosterSource, Team};
pub use sheet::{ScoreSheet, Sheet, TeamGridSource};
pub use stats::{Accumulators, FieldingLine, HittingLine, PitchingLine, PlayerAccumulator};
pub use timeline::PitcherTimeline;

pub use boxscore_engine::{AtBatOutcome, CellRange, CellRef, parse_notation};
