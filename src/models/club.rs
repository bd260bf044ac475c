//! Club-level season data: overview record and chart series.

use serde::{Deserialize, Serialize};

/// Season performance shown on the club overview cards.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub club_name: String,
    pub season: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    /// Average possession in percent.
    pub avg_possession: u8,
    pub shots_per_game: u32,
    /// Team pass accuracy in percent.
    pub pass_accuracy: u8,
}

impl SeasonRecord {
    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// League points: 3 per win, 1 per draw.
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_scored) - i64::from(self.goals_conceded)
    }
}

/// Result of a finished match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

/// One bar of the "recent match results" chart.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Opponent short code, e.g. "MUN".
    pub opponent: String,
    pub outcome: MatchOutcome,
    pub goals: u32,
}

/// One axis of the team performance radar (0-100).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub category: String,
    pub value: u8,
}

/// One point of the monthly goals trend.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGoals {
    pub month: String,
    pub scored: u32,
    pub conceded: u32,
}

/// All chart series for the club stats section.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClubStats {
    pub recent_results: Vec<MatchResult>,
    pub performance: Vec<PerformanceMetric>,
    pub monthly_goals: Vec<MonthlyGoals>,
}
