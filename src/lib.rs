//! Club dashboard web app: library with the roster, formation model and sample data.

pub mod config;
pub mod data;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    Formation, LineupLine, PlayerRepository, PositionFilter, RosterError, SlotAssignmentModel,
    SquadTotals, StartingLineup,
};
pub use models::{
    AssignPolicy, ClubStats, FormationSnapshot, MatchOutcome, MatchResult, MonthlyGoals, NavItem,
    PerformanceMetric, PitchSlot, Player, PlayerId, Position, SeasonRecord, SeasonStats, Section,
    SlotId, SlotView, UnknownPosition,
};
