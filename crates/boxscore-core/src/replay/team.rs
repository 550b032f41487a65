//! One team's turn at bat, replayed inning by inning.

use boxscore_engine::{AtBatOutcome, parse_notation};
use tracing::{debug, info, warn};

use crate::error::{BoxscoreError, Result};
use crate::roster::{BATTING_ORDER_SLOTS, PlayerId, RosterSource, Team};
use crate::stats::Accumulators;
use crate::timeline::PitcherTimeline;

/// Pitching state left over when a team's grid has been replayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayState {
    pub active_pitcher: Option<PlayerId>,
    pub inherited_runners: u32,
}

/// Result of replaying one batting team against the opposing pitchers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamReplay {
    pub batting: Team,
    pub players: Accumulators,
    pub final_state: ReplayState,
    /// Runs scored per grid column, as recorded on the batters' cells.
    pub runs_by_inning: Vec<u32>,
}

/// Tracks who is pitching and which runners the last pitcher left on base.
struct Mound<'a> {
    timeline: &'a PitcherTimeline,
    slot: usize,
    active: Option<PlayerId>,
    previous: Option<PlayerId>,
    inherited_runners: u32,
}

impl<'a> Mound<'a> {
    fn new(timeline: &'a PitcherTimeline) -> Self {
        Mound {
            timeline,
            slot: 0,
            active: timeline.starter().cloned(),
            previous: None,
            inherited_runners: 0,
        }
    }

    fn change_pitcher(&mut self, fielding: Team, inherited_runners: u32) {
        self.previous = self.active.take();
        self.slot += 1;
        self.active = self.timeline.get(self.slot).cloned();
        self.inherited_runners = inherited_runners;
        match &self.active {
            Some(pitcher) => debug!(
                team = %fielding,
                slot = self.slot,
                %pitcher,
                inherited_runners,
                "pitching change"
            ),
            None => warn!(
                team = %fielding,
                slot = self.slot,
                "pitching change to a slot with no pitcher on the roster"
            ),
        }
    }
}

/// Replay `batting`'s at-bat grid against the fielding team's `timeline`.
///
/// Columns are scanned in order and rows within each column, so pitching
/// changes and inning boundaries apply in the order they happened. Cells
/// that reference nobody (empty batting slot, unfilled position) are
/// skipped without failing the replay.
pub fn replay_team<R: RosterSource + ?Sized>(
    batting: Team,
    grid: &[Vec<String>],
    timeline: &PitcherTimeline,
    roster: &R,
) -> Result<TeamReplay> {
    validate_grid(batting, grid)?;
    for team in [batting, batting.opponent()] {
        if roster.team_players(team).is_empty() {
            return Err(BoxscoreError::EmptyRoster(team));
        }
    }

    let fielding = batting.opponent();
    if timeline.is_empty() {
        debug!(team = %fielding, "no pitchers on the roster; pitching lines will be empty");
    }
    let innings = grid.first().map_or(0, Vec::len);
    let mut players = Accumulators::new();
    let mut mound = Mound::new(timeline);
    let mut runs_by_inning = Vec::with_capacity(innings);

    for col in 0..innings {
        let mut inning_runs = 0;
        for (slot, row) in grid.iter().enumerate() {
            let cell = &row[col];
            if cell.trim().is_empty() {
                continue;
            }
            let outcome = parse_notation(cell);

            if outcome.is_standalone_pitcher_change() {
                mound.change_pitcher(fielding, outcome.inherited_runners);
                continue;
            }

            let Some(batter) = roster.lookup_batter(batting, slot) else {
                debug!(team = %batting, inning = col + 1, slot = slot + 1, cell = %cell, "no batter in slot; cell skipped");
                continue;
            };

            apply_outcome(&mut players, &mut mound, roster, fielding, &batter, &outcome);
            inning_runs += outcome.runs_allowed;

            if outcome.is_pitcher_change {
                mound.change_pitcher(fielding, outcome.inherited_runners);
            }
        }
        runs_by_inning.push(inning_runs);
        mound.inherited_runners = 0;
    }

    info!(
        team = %batting,
        innings,
        players = players.len(),
        runs = runs_by_inning.iter().sum::<u32>(),
        "team replay finished"
    );

    Ok(TeamReplay {
        batting,
        players,
        final_state: ReplayState {
            active_pitcher: mound.active,
            inherited_runners: mound.inherited_runners,
        },
        runs_by_inning,
    })
}

fn validate_grid(team: Team, grid: &[Vec<String>]) -> Result<()> {
    if grid.len() > BATTING_ORDER_SLOTS {
        return Err(BoxscoreError::GridShape {
            team,
            message: format!(
                "{} rows, but only {} batting-order slots",
                grid.len(),
                BATTING_ORDER_SLOTS
            ),
        });
    }
    if let Some(first) = grid.first() {
        let width = first.len();
        if let Some((idx, row)) = grid.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoxscoreError::GridShape {
                team,
                message: format!(
                    "row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    width
                ),
            });
        }
    }
    Ok(())
}

fn apply_outcome<R: RosterSource + ?Sized>(
    players: &mut Accumulators,
    mound: &mut Mound<'_>,
    roster: &R,
    fielding: Team,
    batter: &PlayerId,
    outcome: &AtBatOutcome,
) {
    let entry = players.entry(batter.clone()).or_default();
    entry.fielding_mut();
    let hitting = entry.hitting_mut();
    hitting.at_bats += outcome.at_bats;
    hitting.hits += outcome.hits_allowed;
    hitting.home_runs += outcome.home_runs_allowed;
    hitting.runs_batted_in += outcome.runs_allowed;
    hitting.walks += outcome.walks_allowed;
    hitting.strikeouts += outcome.strikeouts;
    hitting.total_bases += outcome.total_bases;
    if outcome.double_play {
        hitting.double_plays += 1;
    }

    if let Some(pitcher) = &mound.active {
        let pitching = players.entry(pitcher.clone()).or_default().pitching_mut();
        pitching.batters_faced += outcome.batters_faced;
        pitching.outs_recorded += outcome.outs_recorded;
        pitching.hits += outcome.hits_allowed;
        pitching.home_runs += outcome.home_runs_allowed;
        pitching.walks += outcome.walks_allowed;
        pitching.strikeouts += outcome.strikeouts;
    }

    if outcome.runs_allowed > 0 {
        let credited = outcome.runs_allowed.min(mound.inherited_runners);
        if credited > 0
            && let Some(previous) = &mound.previous
            && let Some(line) = players.get_mut(previous).and_then(|acc| acc.pitching.as_mut())
        {
            line.runs += credited;
        }
        if let Some(pitcher) = &mound.active {
            players.entry(pitcher.clone()).or_default().pitching_mut().runs +=
                outcome.runs_allowed - credited;
        }
        mound.inherited_runners -= credited;
    }

    if let Some(position) = outcome.nice_play_fielder() {
        match roster.lookup_fielder_by_position(fielding, position) {
            Some(fielder) => players.entry(fielder).or_default().fielding_mut().nice_plays += 1,
            None => debug!(team = %fielding, position, "no fielder at position; nice play skipped"),
        }
        players.entry(batter.clone()).or_default().hitting_mut().reached_via_robbery += 1;
    }

    if let Some(position) = outcome.error_fielder() {
        match roster.lookup_fielder_by_position(fielding, position) {
            Some(fielder) => players.entry(fielder).or_default().fielding_mut().errors += 1,
            None => debug!(team = %fielding, position, "no fielder at position; error skipped"),
        }
    }

    if outcome.stolen_base {
        players
            .entry(batter.clone())
            .or_default()
            .fielding_mut()
            .stolen_bases_allowed += 1;
    }
}
