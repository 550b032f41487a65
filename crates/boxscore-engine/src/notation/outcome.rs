//! The structured result of parsing one at-bat cell.

use serde::{Deserialize, Serialize};

/// Everything a single scoresheet cell says about a plate appearance.
///
/// `runs_allowed` is shared by both sides of the ball: it is the pitcher's
/// runs allowed and, read from the batter's row, the runs batted in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtBatOutcome {
    // Pitching-facing counters.
    pub batters_faced: u32,
    pub outs_recorded: u32,
    pub hits_allowed: u32,
    pub home_runs_allowed: u32,
    pub runs_allowed: u32,
    pub walks_allowed: u32,
    pub strikeouts: u32,

    // Hitting-facing counters.
    pub at_bats: u32,
    pub total_bases: u32,

    // Legacy markers without a fielder attached.
    pub nice_play_occurred: bool,
    pub error_occurred: bool,

    pub stolen_base: bool,
    pub caught_stealing: bool,
    /// Set for both double and triple plays.
    pub double_play: bool,
    pub fielders_choice_no_out: bool,

    pub is_pitcher_change: bool,
    pub inherited_runners: u32,

    pub is_error: bool,
    pub is_nice_play: bool,
    /// Scorebook number (1..=9) of the fielder credited with the error or
    /// nice play. When both appear, the nice play wins.
    pub fielder_position: Option<u8>,
}

impl AtBatOutcome {
    /// True for a cell that only records a pitching change.
    pub fn is_standalone_pitcher_change(&self) -> bool {
        self.is_pitcher_change && self.batters_faced == 0
    }

    /// True for the all-zero outcome produced by a blank cell.
    pub fn is_empty(&self) -> bool {
        *self == AtBatOutcome::default()
    }

    /// Fielder credited with a nice play, if one was named.
    pub fn nice_play_fielder(&self) -> Option<u8> {
        if self.is_nice_play {
            self.fielder_position
        } else {
            None
        }
    }

    /// Fielder charged with an error, if one was named.
    pub fn error_fielder(&self) -> Option<u8> {
        if self.is_error {
            self.fielder_position
        } else {
            None
        }
    }

    /// Non-default fields as `name=value` pairs, in declaration order.
    /// `batters_faced` is always included.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("batters_faced", self.batters_faced.to_string())];
        let counters = [
            ("outs_recorded", self.outs_recorded),
            ("hits_allowed", self.hits_allowed),
            ("home_runs_allowed", self.home_runs_allowed),
            ("runs_allowed", self.runs_allowed),
            ("walks_allowed", self.walks_allowed),
            ("strikeouts", self.strikeouts),
            ("at_bats", self.at_bats),
            ("total_bases", self.total_bases),
        ];
        for (name, value) in counters {
            if value != 0 {
                fields.push((name, value.to_string()));
            }
        }
        let flags = [
            ("nice_play_occurred", self.nice_play_occurred),
            ("error_occurred", self.error_occurred),
            ("stolen_base", self.stolen_base),
            ("caught_stealing", self.caught_stealing),
            ("double_play", self.double_play),
            ("fielders_choice_no_out", self.fielders_choice_no_out),
            ("is_pitcher_change", self.is_pitcher_change),
            ("is_error", self.is_error),
            ("is_nice_play", self.is_nice_play),
        ];
        for (name, value) in flags {
            if value {
                fields.push((name, "true".to_string()));
            }
        }
        if self.is_pitcher_change {
            fields.push(("inherited_runners", self.inherited_runners.to_string()));
        }
        if let Some(pos) = self.fielder_position {
            fields.push(("fielder_position", pos.to_string()));
        }
        fields
    }
}
