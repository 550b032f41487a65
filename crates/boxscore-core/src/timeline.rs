//! Order in which a team's pitchers took the mound.

use std::collections::BTreeMap;

use crate::roster::{PlayerId, RosterSource, Team};

/// Slot 0 is the starter, slot n the n-th reliever. Slots may be missing
/// when a reliever number was skipped on the roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PitcherTimeline {
    slots: BTreeMap<usize, PlayerId>,
}

impl PitcherTimeline {
    /// Build the fielding team's timeline from every player's position
    /// history ("SP" → slot 0, "RP<n>" → slot n). If two players claim the
    /// same slot, the later one in roster order wins.
    pub fn build<R: RosterSource + ?Sized>(roster: &R, team: Team) -> PitcherTimeline {
        let mut slots = BTreeMap::new();
        for player in roster.team_players(team) {
            let Some(history) = roster.position_history(&player) else {
                continue;
            };
            for slot in history.iter().filter_map(|p| p.pitcher_slot()) {
                slots.insert(slot, player.clone());
            }
        }
        PitcherTimeline { slots }
    }

    pub fn get(&self, slot: usize) -> Option<&PlayerId> {
        self.slots.get(&slot)
    }

    pub fn starter(&self) -> Option<&PlayerId> {
        self.get(0)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use boxscore_engine::PositionHistory;

    #[test]
    fn test_build_from_histories() {
        let mut roster = Roster::new();
        roster.add_player(Team::Home, "Second", Some(0), PositionHistory::from_trail("LF <- RP2 <- 2B"));
        roster.add_player(Team::Home, "Starter", None, ["SP"].into_iter().collect());
        roster.add_player(Team::Home, "First", Some(1), ["RP1", "1B"].into_iter().collect());
        roster.add_player(Team::Away, "Other", None, ["SP"].into_iter().collect());

        let timeline = PitcherTimeline::build(&roster, Team::Home);
        assert_eq!(timeline.starter(), Some(&PlayerId::new(Team::Home, "Starter")));
        assert_eq!(timeline.get(1), Some(&PlayerId::new(Team::Home, "First")));
        assert_eq!(timeline.get(2), Some(&PlayerId::new(Team::Home, "Second")));
        assert_eq!(timeline.get(3), None);
    }

    #[test]
    fn test_skipped_relief_slot_is_tolerated() {
        let mut roster = Roster::new();
        roster.add_player(Team::Away, "Starter", None, ["SP"].into_iter().collect());
        roster.add_player(Team::Away, "Closer", None, ["RP3"].into_iter().collect());

        let timeline = PitcherTimeline::build(&roster, Team::Away);
        assert!(timeline.get(1).is_none());
        assert!(timeline.get(2).is_none());
        assert_eq!(timeline.get(3), Some(&PlayerId::new(Team::Away, "Closer")));
    }

    #[test]
    fn test_no_pitchers() {
        let mut roster = Roster::new();
        roster.add_player(Team::Away, "Fielder", Some(0), ["CF"].into_iter().collect());
        assert!(PitcherTimeline::build(&roster, Team::Away).is_empty());
    }
}
