//! Squad aggregates for the club overview.

use crate::logic::roster::PlayerRepository;
use crate::models::PlayerId;
use serde::Serialize;

/// Totals computed from the roster's season stats.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SquadTotals {
    pub squad_size: usize,
    pub goals: u32,
    pub assists: u32,
    pub appearances: u32,
    /// Mean rating rounded to one decimal; 0 for an empty squad.
    pub average_rating: f32,
    pub captain: Option<PlayerId>,
    pub vice_captain: Option<PlayerId>,
}

impl SquadTotals {
    pub fn from_roster(roster: &PlayerRepository) -> Self {
        let players = roster.all();
        let rating_sum: f32 = players.iter().map(|p| p.rating).sum();
        let average_rating = if players.is_empty() {
            0.0
        } else {
            (rating_sum / players.len() as f32 * 10.0).round() / 10.0
        };
        Self {
            squad_size: players.len(),
            goals: players.iter().map(|p| p.stats.goals).sum(),
            assists: players.iter().map(|p| p.stats.assists).sum(),
            appearances: players.iter().map(|p| p.stats.appearances).sum(),
            average_rating,
            // Flags are not enforced unique; the first flagged player wins.
            captain: players.iter().find(|p| p.is_captain).map(|p| p.id),
            vice_captain: players.iter().find(|p| p.is_vice_captain).map(|p| p.id),
        }
    }
}
