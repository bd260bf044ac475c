//! Squad grid filter and the starting XI grouped by line.

use crate::logic::roster::PlayerRepository;
use crate::models::{Player, Position};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Squad grid tab: everyone, or a single position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    /// Tabs in display order.
    pub fn tabs() -> [PositionFilter; 5] {
        [
            PositionFilter::All,
            PositionFilter::Only(Position::Goalkeeper),
            PositionFilter::Only(Position::Defender),
            PositionFilter::Only(Position::Midfielder),
            PositionFilter::Only(Position::Forward),
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            PositionFilter::All => "All Players",
            PositionFilter::Only(p) => p.plural_label(),
        }
    }

    pub fn matches(self, player: &Player) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => player.position == p,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => f.write_str("ALL"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(PositionFilter::All);
        }
        s.parse::<Position>()
            .map(PositionFilter::Only)
            .map_err(|e| e.to_string())
    }
}

/// One horizontal group of starters ("Forwards", "Midfielders", ...).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineupLine {
    pub position: Position,
    pub title: &'static str,
    pub players: Vec<Player>,
}

/// Today's starters, grouped by position.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StartingLineup {
    pub forwards: Vec<Player>,
    pub midfielders: Vec<Player>,
    pub defenders: Vec<Player>,
    pub goalkeepers: Vec<Player>,
}

impl StartingLineup {
    pub fn from_roster(roster: &PlayerRepository) -> Self {
        let mut lineup = Self::default();
        for p in roster.filter_by_starting() {
            let line = match p.position {
                Position::Forward => &mut lineup.forwards,
                Position::Midfielder => &mut lineup.midfielders,
                Position::Defender => &mut lineup.defenders,
                Position::Goalkeeper => &mut lineup.goalkeepers,
            };
            line.push(p.clone());
        }
        lineup
    }

    pub fn len(&self) -> usize {
        self.forwards.len() + self.midfielders.len() + self.defenders.len() + self.goalkeepers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty lines from attack to goal, as the page renders them.
    pub fn lines(&self) -> Vec<LineupLine> {
        [
            (Position::Forward, "Forwards", &self.forwards),
            (Position::Midfielder, "Midfielders", &self.midfielders),
            (Position::Defender, "Defenders", &self.defenders),
            (Position::Goalkeeper, "Goalkeeper", &self.goalkeepers),
        ]
        .into_iter()
        .filter(|(_, _, players)| !players.is_empty())
        .map(|(position, title, players)| LineupLine {
            position,
            title,
            players: players.clone(),
        })
        .collect()
    }
}
