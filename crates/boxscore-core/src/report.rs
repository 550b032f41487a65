//! Box-score tables built from a replayed game.
//!
//! Tables are plain rows of strings so they can go to CSV, markdown, or
//! back into a [`Sheet`](crate::sheet::Sheet) with `write_region`.

use boxscore_engine::{CellRef, format_innings_pitched};

use crate::replay::GameReplay;
use crate::roster::{Roster, Team};
use crate::sheet::Sheet;

pub const BATTING_HEADER: &[&str] = &["Batting", "AB", "H", "HR", "RBI", "BB", "K", "ROB", "DP", "TB"];
pub const PITCHING_HEADER: &[&str] = &["Pitching", "BF", "IP", "H", "HR", "R", "BB", "K"];
pub const FIELDING_HEADER: &[&str] = &["Fielding", "NP", "E", "SB"];

fn header(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

fn row(name: &str, values: &[u32]) -> Vec<String> {
    std::iter::once(name.to_string())
        .chain(values.iter().map(|v| v.to_string()))
        .collect()
}

/// Batting block for `team`, in roster order. Players without a hitting line are left out.
pub fn batting_table(game: &GameReplay, roster: &Roster, team: Team) -> Vec<Vec<String>> {
    let mut rows = vec![header(BATTING_HEADER)];
    for player in roster.players(team) {
        let Some(h) = game.player(&player.id).and_then(|acc| acc.hitting.as_ref()) else {
            continue;
        };
        rows.push(row(
            &player.id.name,
            &[
                h.at_bats,
                h.hits,
                h.home_runs,
                h.runs_batted_in,
                h.walks,
                h.strikeouts,
                h.reached_via_robbery,
                h.double_plays,
                h.total_bases,
            ],
        ));
    }
    rows
}

/// Pitching block for `team`, in roster order.
pub fn pitching_table(game: &GameReplay, roster: &Roster, team: Team) -> Vec<Vec<String>> {
    let mut rows = vec![header(PITCHING_HEADER)];
    for player in roster.players(team) {
        let Some(p) = game.player(&player.id).and_then(|acc| acc.pitching.as_ref()) else {
            continue;
        };
        let mut line = row(&player.id.name, &[p.batters_faced]);
        line.push(format_innings_pitched(p.outs_recorded as i64));
        line.extend(
            [p.hits, p.home_runs, p.runs, p.walks, p.strikeouts]
                .iter()
                .map(|v| v.to_string()),
        );
        rows.push(line);
    }
    rows
}

/// Fielding block for `team`, in roster order.
pub fn fielding_table(game: &GameReplay, roster: &Roster, team: Team) -> Vec<Vec<String>> {
    let mut rows = vec![header(FIELDING_HEADER)];
    for player in roster.players(team) {
        let Some(f) = game.player(&player.id).and_then(|acc| acc.fielding.as_ref()) else {
            continue;
        };
        rows.push(row(
            &player.id.name,
            &[f.nice_plays, f.errors, f.stolen_bases_allowed],
        ));
    }
    rows
}

/// All three blocks for `team`, separated by a blank row.
pub fn stat_table(game: &GameReplay, roster: &Roster, team: Team) -> Vec<Vec<String>> {
    let mut rows = batting_table(game, roster, team);
    rows.push(Vec::new());
    rows.extend(pitching_table(game, roster, team));
    rows.push(Vec::new());
    rows.extend(fielding_table(game, roster, team));
    rows
}

/// Runs per inning plus R/H/E for both teams.
pub fn line_score(game: &GameReplay, roster: &Roster) -> Vec<Vec<String>> {
    let innings = game
        .away
        .runs_by_inning
        .len()
        .max(game.home.runs_by_inning.len());

    let mut head = vec![String::new()];
    head.extend((1..=innings).map(|i| i.to_string()));
    head.extend(["R", "H", "E"].iter().map(|s| s.to_string()));

    let mut rows = vec![head];
    for team in Team::BOTH {
        let runs = &game.half(team).runs_by_inning;
        let mut line = vec![roster.team_name(team).to_string()];
        line.extend((0..innings).map(|i| runs.get(i).map(|r| r.to_string()).unwrap_or_default()));
        let totals = game.team_line(team);
        line.extend([totals.runs, totals.hits, totals.errors].iter().map(|v| v.to_string()));
        rows.push(line);
    }
    rows
}

/// Lay out the line score and both teams' stat tables on a fresh sheet,
/// one block under the other.
pub fn box_score_sheet(game: &GameReplay, roster: &Roster) -> Sheet {
    let sheet = Sheet::new();
    let mut row = 0;
    let mut place = |block: Vec<Vec<String>>| {
        sheet.write_region(CellRef::new(0, row), &block);
        row += block.len() + 1;
    };
    place(line_score(game, roster));
    for team in Team::BOTH {
        place(vec![vec![roster.team_name(team).to_string()]]);
        place(stat_table(game, roster, team));
    }
    sheet
}
