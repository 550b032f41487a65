//! Sparse scoresheet storage and the team at-bat grid source.

use boxscore_engine::{CellRange, CellRef};
use dashmap::DashMap;

use crate::error::{BoxscoreError, Result};
use crate::roster::{BATTING_ORDER_SLOTS, Team};

/// Sparse text grid. Empty cells are never stored.
#[derive(Debug, Default)]
pub struct Sheet {
    cells: DashMap<CellRef, String>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: &CellRef) -> Option<String> {
        self.cells.get(cell).map(|entry| entry.value().clone())
    }

    /// Set a cell. An empty or whitespace-only value clears it.
    pub fn set(&self, cell: CellRef, value: &str) {
        if value.trim().is_empty() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read a rectangular region row by row; missing cells read as "".
    pub fn read_region(&self, range: &CellRange) -> Vec<Vec<String>> {
        (range.start.row..=range.end.row)
            .map(|row| {
                (range.start.col..=range.end.col)
                    .map(|col| self.get(&CellRef::new(col, row)).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Write a block of values with its top-left corner at `origin`.
    /// Rows may differ in length.
    pub fn write_region(&self, origin: CellRef, values: &[Vec<String>]) {
        for (dr, row) in values.iter().enumerate() {
            for (dc, value) in row.iter().enumerate() {
                self.set(CellRef::new(origin.col + dc, origin.row + dr), value);
            }
        }
    }

    /// Smallest range covering every populated cell.
    pub fn bounds(&self) -> Option<CellRange> {
        let mut min_row = usize::MAX;
        let mut min_col = usize::MAX;
        let mut max_row = 0usize;
        let mut max_col = 0usize;

        for entry in self.cells.iter() {
            let cell_ref = entry.key();
            min_row = min_row.min(cell_ref.row);
            min_col = min_col.min(cell_ref.col);
            max_row = max_row.max(cell_ref.row);
            max_col = max_col.max(cell_ref.col);
        }

        if min_row == usize::MAX {
            return None;
        }
        Some(CellRange::new(
            CellRef::new(min_col, min_row),
            CellRef::new(max_col, max_row),
        ))
    }
}

/// Supplies each team's at-bat grid: rows are batting-order slots, columns
/// are innings in order, "" for empty cells.
pub trait TeamGridSource {
    fn read_team_grid(&self, team: Team) -> Result<Vec<Vec<String>>>;
}

/// A sheet plus the region holding each team's at-bats.
#[derive(Debug)]
pub struct ScoreSheet {
    pub sheet: Sheet,
    pub away_grid: CellRange,
    pub home_grid: CellRange,
}

impl ScoreSheet {
    pub fn new(sheet: Sheet, away_grid: CellRange, home_grid: CellRange) -> Self {
        ScoreSheet {
            sheet,
            away_grid,
            home_grid,
        }
    }

    pub fn region(&self, team: Team) -> &CellRange {
        match team {
            Team::Away => &self.away_grid,
            Team::Home => &self.home_grid,
        }
    }
}

impl TeamGridSource for ScoreSheet {
    fn read_team_grid(&self, team: Team) -> Result<Vec<Vec<String>>> {
        let region = self.region(team);
        if region.rows() > BATTING_ORDER_SLOTS {
            return Err(BoxscoreError::GridShape {
                team,
                message: format!(
                    "region {} has {} rows, but only {} batting-order slots",
                    region,
                    region.rows(),
                    BATTING_ORDER_SLOTS
                ),
            });
        }
        Ok(self.sheet.read_region(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_region_fills_blanks() {
        let sheet = Sheet::new();
        sheet.set(CellRef::new(1, 1), "1B");
        sheet.set(CellRef::new(2, 2), "K");
        let range = CellRange::parse("B2:C3").unwrap();
        assert_eq!(
            sheet.read_region(&range),
            vec![
                vec!["1B".to_string(), String::new()],
                vec![String::new(), "K".to_string()],
            ]
        );
    }

    #[test]
    fn test_set_blank_clears() {
        let sheet = Sheet::new();
        sheet.set(CellRef::new(0, 0), "HR");
        sheet.set(CellRef::new(0, 0), "  ");
        assert!(sheet.is_empty());
        assert!(sheet.bounds().is_none());
    }

    #[test]
    fn test_write_region_and_bounds() {
        let sheet = Sheet::new();
        let block = vec![
            vec!["Batting".to_string(), "AB".to_string()],
            vec!["Smith".to_string()],
        ];
        sheet.write_region(CellRef::new(3, 4), &block);
        assert_eq!(sheet.get(&CellRef::new(4, 4)).as_deref(), Some("AB"));
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.bounds(), CellRange::parse("D5:E6"));
    }

    #[test]
    fn test_score_sheet_reads_team_regions() {
        let sheet = Sheet::new();
        sheet.set(CellRef::from_str("B2").unwrap(), "BB");
        sheet.set(CellRef::from_str("B6").unwrap(), "HR");
        let score = ScoreSheet::new(
            sheet,
            CellRange::parse("B2:C3").unwrap(),
            CellRange::parse("B6:C7").unwrap(),
        );
        assert_eq!(score.read_team_grid(Team::Away).unwrap()[0][0], "BB");
        assert_eq!(score.read_team_grid(Team::Home).unwrap()[0][0], "HR");
    }

    #[test]
    fn test_tall_region_is_rejected_before_reading() {
        let score = ScoreSheet::new(
            Sheet::new(),
            CellRange::parse("A1:A20000000").unwrap(),
            CellRange::parse("B2:B10").unwrap(),
        );
        let err = score.read_team_grid(Team::Away).unwrap_err();
        assert!(matches!(err, BoxscoreError::GridShape { team: Team::Away, .. }));
        assert_eq!(score.read_team_grid(Team::Home).unwrap().len(), 9);
    }
}
