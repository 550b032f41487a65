//! boxscore_engine - At-bat notation parsing and scoring vocabulary.
//!
//! - [`notation`] - Shorthand notation → [`notation::AtBatOutcome`]
//! - [`position`] - Fielding positions and position histories
//! - [`innings`] - Innings pitched from outs recorded
//! - [`cell_ref`] - Scoresheet cell and range addressing (A1 notation)

pub mod cell_ref;
pub mod innings;
pub mod notation;
pub mod position;

pub use cell_ref::{CellRange, CellRef};
pub use innings::{format_innings_pitched, innings_pitched};
pub use notation::{AtBatOutcome, parse_notation};
pub use position::{Position, PositionHistory};

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_from_str_single_letter_columns() {
        let a1 = CellRef::from_str("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let z1 = CellRef::from_str("Z1").unwrap();
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_from_str_invalid_inputs() {
        assert!(CellRef::from_str("").is_none());
        assert!(CellRef::from_str("123").is_none());
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("A 1").is_none());
    }

    #[test]
    fn test_notation_is_case_insensitive() {
        assert_eq!(parse_notation("hr 2rbi"), parse_notation("HR 2RBI"));
        assert_eq!(parse_notation("k pc[1]"), parse_notation("K PC1"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let cells = ["1B", "K", "HR 4RBI", "FC", "SF RBI", "PC2", "2B E6 NP4", ""];
        for raw in cells {
            assert_eq!(parse_notation(raw), parse_notation(raw), "{raw}");
        }
    }

    #[test]
    fn test_outs_feed_innings_pitched() {
        let outs: u32 = ["K", "DP", "OUT", "TP", "1B"]
            .iter()
            .map(|raw| parse_notation(raw).outs_recorded)
            .sum();
        assert_eq!(outs, 7);
        assert_eq!(format_innings_pitched(outs as i64), "2.33");
    }

    #[test]
    fn test_relief_slot_from_history() {
        let history = PositionHistory::from_trail("LF <- RP2 <- 2B");
        let slots: Vec<usize> = history.iter().filter_map(Position::pitcher_slot).collect();
        assert_eq!(slots, vec![2]);
    }
}
