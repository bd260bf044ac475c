//! Player, Position and SeasonStats data structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a player (used by pitch slots and lookups).
pub type PlayerId = u32;

/// Playing position shown on cards and used by the squad filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Short code as shown on the cards ("GK", "DEF", ...).
    pub fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Plural heading used by the squad tabs and the starting XI lines.
    pub fn plural_label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeepers",
            Position::Defender => "Defenders",
            Position::Midfielder => "Midfielders",
            Position::Forward => "Forwards",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a position code is not one of GK/DEF/MID/FWD.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown position '{}'", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// Season statistics for one player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    /// Percentage, 0-100.
    pub pass_accuracy: u8,
    pub minutes_played: u32,
    /// Only tracked for goalkeepers.
    pub saves: Option<u32>,
    pub tackles: Option<u32>,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl SeasonStats {
    /// Card summary as shown on the hover panel: "2Y 1R", "3Y" or "Clean".
    pub fn discipline(&self) -> String {
        let mut parts = Vec::new();
        if self.yellow_cards > 0 {
            parts.push(format!("{}Y", self.yellow_cards));
        }
        if self.red_cards > 0 {
            parts.push(format!("{}R", self.red_cards));
        }
        if parts.is_empty() {
            "Clean".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// A squad member. Immutable once loaded into the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub squad_number: u8,
    pub position: Position,
    pub rating: f32,
    pub stats: SeasonStats,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    /// Part of today's starting XI.
    pub is_starting: bool,
}

impl Player {
    /// Create a squad player with empty stats and no flags set.
    pub fn new(id: PlayerId, name: impl Into<String>, squad_number: u8, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            squad_number,
            position,
            rating: 0.0,
            stats: SeasonStats::default(),
            is_captain: false,
            is_vice_captain: false,
            is_starting: false,
        }
    }

    /// Last word of the name (pitch cards only have room for the surname).
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(self.name.as_str())
    }
}
