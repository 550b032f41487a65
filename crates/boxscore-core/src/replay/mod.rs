//! Box-score replay.
//!
//! Every replay starts from empty accumulators and reads the full at-bat
//! history, so running it twice on the same input gives the same totals.

mod game;
mod team;

pub use game::{GameReplay, HalfSummary, TeamLine, replay_game};
pub use team::{ReplayState, TeamReplay, replay_team};
