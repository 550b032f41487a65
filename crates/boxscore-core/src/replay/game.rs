//! Both halves of a game: each team bats against the other's pitchers.

use crate::error::Result;
use crate::roster::{PlayerId, RosterSource, Team};
use crate::sheet::TeamGridSource;
use crate::stats::{Accumulators, PlayerAccumulator};
use crate::timeline::PitcherTimeline;

use super::team::{ReplayState, replay_team};

/// What happened while one team was at bat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HalfSummary {
    pub final_state: ReplayState,
    pub runs_by_inning: Vec<u32>,
}

/// Totals for a line score row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamLine {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

/// Stats for every player in the game, plus each batting team's summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameReplay {
    pub players: Accumulators,
    pub away: HalfSummary,
    pub home: HalfSummary,
}

impl GameReplay {
    /// Summary of the half in which `team` batted.
    pub fn half(&self, team: Team) -> &HalfSummary {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerAccumulator> {
        self.players.get(id)
    }

    /// Runs, hits and errors for `team`. Errors are the ones its own
    /// fielders committed.
    pub fn team_line(&self, team: Team) -> TeamLine {
        let mut line = TeamLine {
            runs: self.half(team).runs_by_inning.iter().sum(),
            ..Default::default()
        };
        for (_, acc) in self.players.iter().filter(|(id, _)| id.team == team) {
            if let Some(hitting) = &acc.hitting {
                line.hits += hitting.hits;
            }
            if let Some(fielding) = &acc.fielding {
                line.errors += fielding.errors;
            }
        }
        line
    }
}

/// Replay the whole game from scratch: away batting against the home
/// pitchers, then home batting against the away pitchers.
pub fn replay_game<G, R>(grids: &G, roster: &R) -> Result<GameReplay>
where
    G: TeamGridSource + ?Sized,
    R: RosterSource + ?Sized,
{
    let mut game = GameReplay::default();

    for batting in Team::BOTH {
        let grid = grids.read_team_grid(batting)?;
        let timeline = PitcherTimeline::build(roster, batting.opponent());
        let replay = replay_team(batting, &grid, &timeline, roster)?;

        for (id, acc) in &replay.players {
            game.players.entry(id.clone()).or_default().merge(acc);
        }
        let summary = HalfSummary {
            final_state: replay.final_state,
            runs_by_inning: replay.runs_by_inning,
        };
        match batting {
            Team::Away => game.away = summary,
            Team::Home => game.home = summary,
        }
    }

    Ok(game)
}
