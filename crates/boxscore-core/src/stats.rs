//! Per-player running totals built up during a replay.

use boxscore_engine::innings_pitched;
use std::collections::BTreeMap;

use crate::roster::PlayerId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PitchingLine {
    pub batters_faced: u32,
    pub outs_recorded: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
}

impl PitchingLine {
    pub fn innings_pitched(&self) -> f64 {
        innings_pitched(self.outs_recorded as i64)
    }

    fn merge(&mut self, other: &PitchingLine) {
        self.batters_faced += other.batters_faced;
        self.outs_recorded += other.outs_recorded;
        self.hits += other.hits;
        self.home_runs += other.home_runs;
        self.runs += other.runs;
        self.walks += other.walks;
        self.strikeouts += other.strikeouts;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HittingLine {
    pub at_bats: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub runs_batted_in: u32,
    pub walks: u32,
    pub strikeouts: u32,
    /// Times a fielder's nice play took a hit away from this batter.
    pub reached_via_robbery: u32,
    pub double_plays: u32,
    pub total_bases: u32,
}

impl HittingLine {
    fn merge(&mut self, other: &HittingLine) {
        self.at_bats += other.at_bats;
        self.hits += other.hits;
        self.home_runs += other.home_runs;
        self.runs_batted_in += other.runs_batted_in;
        self.walks += other.walks;
        self.strikeouts += other.strikeouts;
        self.reached_via_robbery += other.reached_via_robbery;
        self.double_plays += other.double_plays;
        self.total_bases += other.total_bases;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldingLine {
    pub nice_plays: u32,
    pub errors: u32,
    pub stolen_bases_allowed: u32,
}

impl FieldingLine {
    fn merge(&mut self, other: &FieldingLine) {
        self.nice_plays += other.nice_plays;
        self.errors += other.errors;
        self.stolen_bases_allowed += other.stolen_bases_allowed;
    }
}

/// Stat lines for one player; each is created the first time it is touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerAccumulator {
    pub pitching: Option<PitchingLine>,
    pub hitting: Option<HittingLine>,
    pub fielding: Option<FieldingLine>,
}

impl PlayerAccumulator {
    pub fn pitching_mut(&mut self) -> &mut PitchingLine {
        self.pitching.get_or_insert_with(PitchingLine::default)
    }

    pub fn hitting_mut(&mut self) -> &mut HittingLine {
        self.hitting.get_or_insert_with(HittingLine::default)
    }

    pub fn fielding_mut(&mut self) -> &mut FieldingLine {
        self.fielding.get_or_insert_with(FieldingLine::default)
    }

    /// Add another accumulator's totals into this one.
    pub fn merge(&mut self, other: &PlayerAccumulator) {
        if let Some(line) = &other.pitching {
            self.pitching_mut().merge(line);
        }
        if let Some(line) = &other.hitting {
            self.hitting_mut().merge(line);
        }
        if let Some(line) = &other.fielding {
            self.fielding_mut().merge(line);
        }
    }
}

/// Accumulators keyed by player, ordered for stable output.
pub type Accumulators = BTreeMap<PlayerId, PlayerAccumulator>;
