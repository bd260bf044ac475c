//! Data structures for the club dashboard: players, pitch slots, club stats, navigation.

mod club;
mod player;
mod section;
mod slot;

pub use club::{ClubStats, MatchOutcome, MatchResult, MonthlyGoals, PerformanceMetric, SeasonRecord};
pub use player::{Player, PlayerId, Position, SeasonStats, UnknownPosition};
pub use section::{NavItem, Section};
pub use slot::{AssignPolicy, FormationSnapshot, PitchSlot, SlotId, SlotView};
