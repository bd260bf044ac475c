//! Pitch slots, assignment policy, and the serializable formation snapshot.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable slot identifier ("gk", "lb", "st", ...).
pub type SlotId = String;

/// A named position on the pitch that holds at most one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchSlot {
    pub id: SlotId,
    /// Horizontal position in percent of the pitch width.
    pub x: f32,
    /// Vertical position in percent of the pitch height (0 = opponent's goal line).
    pub y: f32,
    /// None when the slot is empty.
    pub player_id: Option<PlayerId>,
}

impl PitchSlot {
    pub fn new(id: impl Into<SlotId>, x: f32, y: f32, player_id: Option<PlayerId>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            player_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player_id.is_none()
    }
}

/// What `assign` does when the dragged player already occupies another slot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignPolicy {
    /// Clear the player's previous slot first, so a player is never on the pitch twice.
    #[default]
    Move,
    /// Leave the previous slot untouched; the player can show up in two slots.
    Duplicate,
}

impl fmt::Display for AssignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignPolicy::Move => f.write_str("move"),
            AssignPolicy::Duplicate => f.write_str("duplicate"),
        }
    }
}

impl FromStr for AssignPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move" => Ok(AssignPolicy::Move),
            "duplicate" => Ok(AssignPolicy::Duplicate),
            other => Err(format!("Unknown assign policy '{other}' (expected move or duplicate)")),
        }
    }
}

/// One slot with its occupant resolved, for the pitch view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotView {
    pub id: SlotId,
    pub x: f32,
    pub y: f32,
    pub player: Option<Player>,
}

/// Everything the teamsheet view needs to render the pitch and the bench list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormationSnapshot {
    pub formation: String,
    pub policy: AssignPolicy,
    pub slots: Vec<SlotView>,
    pub available_players: Vec<Player>,
    pub updated_at: DateTime<Utc>,
}
