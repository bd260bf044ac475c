//! Read-only squad roster: lookup by id, filtering, CSV import.

use crate::logic::lineup::PositionFilter;
use crate::models::{Player, PlayerId, Position, SeasonStats};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Errors that can occur while loading a roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// A CSV record could not be read or decoded.
    Parse { line: Option<u64>, message: String },
    /// The source contained no players.
    Empty,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Parse { line: Some(line), message } => {
                write!(f, "Roster line {}: {}", line, message)
            }
            RosterError::Parse { line: None, message } => write!(f, "Roster: {}", message),
            RosterError::Empty => write!(f, "Roster contains no players"),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Parse {
            line: e.position().map(|p| p.line()),
            message: e.to_string(),
        }
    }
}

/// Flat CSV row; nested stats are rebuilt in `into_player`.
#[derive(Debug, Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    name: String,
    squad_number: u8,
    position: Position,
    rating: f32,
    appearances: u32,
    goals: u32,
    assists: u32,
    pass_accuracy: u8,
    minutes_played: u32,
    saves: Option<u32>,
    tackles: Option<u32>,
    yellow_cards: u32,
    red_cards: u32,
    is_captain: bool,
    is_vice_captain: bool,
    is_starting: bool,
}

impl PlayerRecord {
    fn into_player(self) -> Player {
        Player {
            id: self.id,
            name: self.name.trim().to_string(),
            squad_number: self.squad_number,
            position: self.position,
            rating: self.rating,
            stats: SeasonStats {
                appearances: self.appearances,
                goals: self.goals,
                assists: self.assists,
                pass_accuracy: self.pass_accuracy,
                minutes_played: self.minutes_played,
                saves: self.saves,
                tackles: self.tackles,
                yellow_cards: self.yellow_cards,
                red_cards: self.red_cards,
            },
            is_captain: self.is_captain,
            is_vice_captain: self.is_vice_captain,
            is_starting: self.is_starting,
        }
    }
}

/// The squad, in insertion order, indexed by player id.
#[derive(Clone, Debug, Default)]
pub struct PlayerRepository {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerRepository {
    /// Build a roster. Ids must be unique: for a repeated id the first record wins.
    pub fn new(players: Vec<Player>) -> Self {
        let mut kept = Vec::with_capacity(players.len());
        let mut index = HashMap::with_capacity(players.len());
        for p in players {
            if index.contains_key(&p.id) {
                log::warn!("Dropping duplicate player id {} ({})", p.id, p.name);
                continue;
            }
            index.insert(p.id, kept.len());
            kept.push(p);
        }
        Self {
            players: kept,
            index,
        }
    }

    /// The built-in sample squad.
    pub fn sample() -> Self {
        Self::new(crate::data::sample_players())
    }

    /// Load a roster from CSV with a header row (see `PlayerRecord` for columns).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let players = rdr
            .deserialize::<PlayerRecord>()
            .map(|row| row.map(PlayerRecord::into_player))
            .collect::<Result<Vec<_>, _>>()?;
        if players.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self::new(players))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| RosterError::Parse {
            line: None,
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_csv_reader(file)
    }

    /// Full roster in insertion order.
    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn by_id(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    pub fn filter_by_position(&self, position: Position) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position == position).collect()
    }

    pub fn filter_by_starting(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_starting).collect()
    }

    /// Squad grid tab filter; `All` returns the whole roster.
    pub fn filter(&self, filter: PositionFilter) -> Vec<&Player> {
        self.players.iter().filter(|p| filter.matches(p)).collect()
    }
}
