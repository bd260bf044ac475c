//! Dashboard logic: roster queries, formation editing, lineup and squad aggregates.

mod formation;
mod lineup;
mod roster;
mod stats;

pub use formation::{Formation, SlotAssignmentModel};
pub use lineup::{LineupLine, PositionFilter, StartingLineup};
pub use roster::{PlayerRepository, RosterError};
pub use stats::SquadTotals;
