//! Team rosters: who bats where, and who is playing which position.

use boxscore_engine::{Position, PositionHistory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of batting-order slots per team.
pub const BATTING_ORDER_SLOTS: usize = 9;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Away,
    Home,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::Away, Team::Home];

    /// The team in the field while this one bats.
    pub fn opponent(self) -> Team {
        match self {
            Team::Away => Team::Home,
            Team::Home => Team::Away,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Away => write!(f, "away"),
            Team::Home => write!(f, "home"),
        }
    }
}

/// Identity of a player within a game.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct PlayerId {
    pub team: Team,
    pub name: String,
}

impl PlayerId {
    pub fn new(team: Team, name: &str) -> PlayerId {
        PlayerId {
            team,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    /// Zero-based batting-order slot; `None` for players who never bat.
    pub batting_order: Option<usize>,
    pub positions: PositionHistory,
}

impl Player {
    /// Scorebook number of the position the player holds now.
    pub fn current_position_number(&self) -> Option<u8> {
        self.positions.current().and_then(Position::number)
    }
}

/// Read-only roster queries used by game replay.
pub trait RosterSource {
    /// Every player listed for `team`, in roster order.
    fn team_players(&self, team: Team) -> Vec<PlayerId>;

    /// The player batting in zero-based `slot` for `team`.
    fn lookup_batter(&self, team: Team, slot: usize) -> Option<PlayerId>;

    /// The player whose current position has scorebook number `position`.
    fn lookup_fielder_by_position(&self, team: Team, position: u8) -> Option<PlayerId>;

    /// Positions the player has held, oldest first.
    fn position_history(&self, player: &PlayerId) -> Option<&PositionHistory>;
}

/// In-memory rosters for both teams of one game.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    away_name: String,
    home_name: String,
    away: Vec<Player>,
    home: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            away_name: "Away".to_string(),
            home_name: "Home".to_string(),
            away: Vec::new(),
            home: Vec::new(),
        }
    }

    pub fn set_team_name(&mut self, team: Team, name: &str) {
        match team {
            Team::Away => self.away_name = name.to_string(),
            Team::Home => self.home_name = name.to_string(),
        }
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Away => &self.away_name,
            Team::Home => &self.home_name,
        }
    }

    /// Add a player and return its identity. `batting_order` is zero-based.
    pub fn add_player(
        &mut self,
        team: Team,
        name: &str,
        batting_order: Option<usize>,
        positions: PositionHistory,
    ) -> PlayerId {
        let id = PlayerId::new(team, name);
        self.players_mut(team).push(Player {
            id: id.clone(),
            batting_order,
            positions,
        });
        id
    }

    /// Record a position move for an existing player. Returns false if the
    /// player is not on the roster.
    pub fn record_position(&mut self, player: &PlayerId, position: Position) -> bool {
        match self
            .players_mut(player.team)
            .iter_mut()
            .find(|p| p.id == *player)
        {
            Some(p) => {
                p.positions.push(position);
                true
            }
            None => false,
        }
    }

    pub fn players(&self, team: Team) -> &[Player] {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }

    fn players_mut(&mut self, team: Team) -> &mut Vec<Player> {
        match team {
            Team::Away => &mut self.away,
            Team::Home => &mut self.home,
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players(id.team).iter().find(|p| p.id == *id)
    }
}

impl RosterSource for Roster {
    fn team_players(&self, team: Team) -> Vec<PlayerId> {
        self.players(team).iter().map(|p| p.id.clone()).collect()
    }

    fn lookup_batter(&self, team: Team, slot: usize) -> Option<PlayerId> {
        self.players(team)
            .iter()
            .find(|p| p.batting_order == Some(slot))
            .map(|p| p.id.clone())
    }

    fn lookup_fielder_by_position(&self, team: Team, position: u8) -> Option<PlayerId> {
        self.players(team)
            .iter()
            .find(|p| p.current_position_number() == Some(position))
            .map(|p| p.id.clone())
    }

    fn position_history(&self, player: &PlayerId) -> Option<&PositionHistory> {
        self.player(player).map(|p| &p.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        let mut roster = Roster::new();
        roster.add_player(Team::Home, "Ace", None, ["SP", "LF"].into_iter().collect());
        roster.add_player(Team::Home, "Short", Some(0), ["SS"].into_iter().collect());
        roster.add_player(Team::Home, "Left", Some(1), ["LF"].into_iter().collect());
        roster
    }

    #[test]
    fn test_lookup_batter_by_slot() {
        let roster = sample();
        assert_eq!(
            roster.lookup_batter(Team::Home, 0),
            Some(PlayerId::new(Team::Home, "Short"))
        );
        assert_eq!(roster.lookup_batter(Team::Home, 5), None);
        assert_eq!(roster.lookup_batter(Team::Away, 0), None);
    }

    #[test]
    fn test_lookup_fielder_uses_current_position() {
        let roster = sample();
        // Ace moved from SP to LF and is listed first.
        assert_eq!(
            roster.lookup_fielder_by_position(Team::Home, 7),
            Some(PlayerId::new(Team::Home, "Ace"))
        );
        assert_eq!(roster.lookup_fielder_by_position(Team::Home, 1), None);
        assert_eq!(
            roster.lookup_fielder_by_position(Team::Home, 6),
            Some(PlayerId::new(Team::Home, "Short"))
        );
    }

    #[test]
    fn test_record_position_appends_history() {
        let mut roster = sample();
        let short = PlayerId::new(Team::Home, "Short");
        assert!(roster.record_position(&short, Position::ReliefPitcher(1)));
        assert!(roster.record_position(&short, Position::ReliefPitcher(1)));
        let history = roster.position_history(&short).unwrap();
        assert_eq!(history.to_string(), "SS-RP1");
        assert!(!roster.record_position(&PlayerId::new(Team::Away, "Nobody"), Position::Catcher));
    }

    #[test]
    fn test_team_names() {
        let mut roster = Roster::new();
        assert_eq!(roster.team_name(Team::Away), "Away");
        roster.set_team_name(Team::Home, "Bisons");
        assert_eq!(roster.team_name(Team::Home), "Bisons");
        assert_eq!(Team::Home.opponent(), Team::Away);
    }
}
