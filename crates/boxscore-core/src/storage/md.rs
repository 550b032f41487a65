//! Markdown box-score export

use crate::replay::GameReplay;
use crate::report::{batting_table, fielding_table, line_score, pitching_table};
use crate::roster::{Roster, Team};
use std::io::Write;

/// Write the line score and both teams' stat blocks as markdown tables.
pub fn write_markdown<W: Write>(w: &mut W, game: &GameReplay, roster: &Roster) -> std::io::Result<()> {
    writeln!(
        w,
        "# {} at {}",
        roster.team_name(Team::Away),
        roster.team_name(Team::Home)
    )?;
    writeln!(w)?;
    write_table(w, &line_score(game, roster))?;

    for team in Team::BOTH {
        writeln!(w)?;
        writeln!(w, "## {}", roster.team_name(team))?;
        for table in [
            batting_table(game, roster, team),
            pitching_table(game, roster, team),
            fielding_table(game, roster, team),
        ] {
            if table.len() < 2 {
                continue;
            }
            writeln!(w)?;
            write_table(w, &table)?;
        }
    }

    Ok(())
}

/// Write rows as a markdown table; the first row is the header.
fn write_table<W: Write>(w: &mut W, rows: &[Vec<String>]) -> std::io::Result<()> {
    let Some(head) = rows.first() else {
        return Ok(());
    };
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    write!(w, "|")?;
    for col in 0..width {
        write!(w, " {} |", escape_markdown(head.get(col).map_or("", String::as_str)))?;
    }
    writeln!(w)?;

    write!(w, "|")?;
    for _ in 0..width {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in &rows[1..] {
        write!(w, "|")?;
        for col in 0..width {
            write!(w, " {} |", escape_markdown(row.get(col).map_or("", String::as_str)))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::replay_game;
    use crate::sheet::{ScoreSheet, Sheet};
    use boxscore_engine::{CellRange, CellRef};

    #[test]
    fn test_write_table() {
        let rows = vec![
            vec!["".to_string(), "1".to_string()],
            vec!["A|B".to_string()],
        ];
        let mut out = Vec::new();
        write_table(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "|  | 1 |\n|---|---|\n| A\\|B |  |\n"
        );
    }

    #[test]
    fn test_markdown_box_score() {
        let mut roster = Roster::new();
        roster.set_team_name(Team::Away, "Visitors");
        roster.set_team_name(Team::Home, "Bisons");
        roster.add_player(Team::Away, "Lead", Some(0), ["SP"].into_iter().collect());
        roster.add_player(Team::Home, "Ace", Some(0), ["SP"].into_iter().collect());

        let sheet = Sheet::new();
        sheet.set(CellRef::new(0, 0), "HR RBI");
        sheet.set(CellRef::new(0, 1), "K");
        let score = ScoreSheet::new(
            sheet,
            CellRange::parse("A1").unwrap(),
            CellRange::parse("A2").unwrap(),
        );
        let game = replay_game(&score, &roster).unwrap();

        let mut out = Vec::new();
        write_markdown(&mut out, &game, &roster).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Visitors at Bisons\n"));
        assert!(text.contains("| Visitors | 1 | 1 | 1 | 0 |"));
        assert!(text.contains("| Bisons | 0 | 0 | 0 | 0 |"));
        assert!(text.contains("## Bisons"));
        assert!(text.contains("| Ace | 1 | 0.00 | 1 | 1 | 1 | 0 | 0 |"));
        assert!(text.contains("| Lead | 1 | 0.33 | 0 | 0 | 0 | 0 | 1 |"));
    }
}
