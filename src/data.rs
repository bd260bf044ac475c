//! Built-in sample data: the 2025/26 squad and club season figures.

use crate::models::{
    ClubStats, MatchOutcome, MatchResult, MonthlyGoals, PerformanceMetric, Player, PlayerId,
    Position, SeasonRecord, SeasonStats,
};

struct Row {
    id: PlayerId,
    name: &'static str,
    number: u8,
    position: Position,
    rating: f32,
    // apps, goals, assists, pass %, minutes
    season: (u32, u32, u32, u8, u32),
    saves: Option<u32>,
    tackles: Option<u32>,
    cards: (u32, u32),
    captain: bool,
    vice: bool,
    starting: bool,
}

impl From<Row> for Player {
    fn from(r: Row) -> Self {
        let (appearances, goals, assists, pass_accuracy, minutes_played) = r.season;
        Player {
            id: r.id,
            name: r.name.to_string(),
            squad_number: r.number,
            position: r.position,
            rating: r.rating,
            stats: SeasonStats {
                appearances,
                goals,
                assists,
                pass_accuracy,
                minutes_played,
                saves: r.saves,
                tackles: r.tackles,
                yellow_cards: r.cards.0,
                red_cards: r.cards.1,
            },
            is_captain: r.captain,
            is_vice_captain: r.vice,
            is_starting: r.starting,
        }
    }
}

/// Squad in display order. The default 4-3-3 refers to these ids.
pub fn sample_players() -> Vec<Player> {
    use Position::*;
    let rows = [
        Row { id: 1, name: "Alisson Becker", number: 1, position: Goalkeeper, rating: 8.6, season: (24, 0, 0, 84, 2160), saves: Some(72), tackles: None, cards: (1, 0), captain: false, vice: false, starting: true },
        Row { id: 2, name: "Giorgi Mamardashvili", number: 25, position: Goalkeeper, rating: 7.4, season: (6, 0, 0, 79, 540), saves: Some(17), tackles: None, cards: (0, 0), captain: false, vice: false, starting: false },
        Row { id: 3, name: "Virgil van Dijk", number: 4, position: Defender, rating: 8.7, season: (26, 3, 1, 91, 2340), saves: None, tackles: Some(38), cards: (2, 0), captain: true, vice: false, starting: true },
        Row { id: 4, name: "Jeremie Frimpong", number: 30, position: Defender, rating: 7.8, season: (21, 2, 5, 85, 1610), saves: None, tackles: Some(31), cards: (3, 0), captain: false, vice: false, starting: true },
        Row { id: 5, name: "Milos Kerkez", number: 6, position: Defender, rating: 7.6, season: (23, 1, 4, 83, 1890), saves: None, tackles: Some(42), cards: (4, 0), captain: false, vice: false, starting: true },
        Row { id: 6, name: "Ibrahima Konate", number: 5, position: Defender, rating: 8.1, season: (22, 2, 0, 89, 1920), saves: None, tackles: Some(35), cards: (5, 1), captain: false, vice: false, starting: true },
        Row { id: 7, name: "Joe Gomez", number: 2, position: Defender, rating: 7.3, season: (11, 0, 1, 87, 720), saves: None, tackles: Some(14), cards: (1, 0), captain: false, vice: false, starting: false },
        Row { id: 8, name: "Andrew Robertson", number: 26, position: Defender, rating: 7.5, season: (14, 0, 3, 82, 930), saves: None, tackles: Some(19), cards: (2, 0), captain: false, vice: false, starting: false },
        Row { id: 9, name: "Dominik Szoboszlai", number: 8, position: Midfielder, rating: 8.3, season: (27, 6, 7, 86, 2210), saves: None, tackles: Some(29), cards: (3, 0), captain: false, vice: false, starting: true },
        Row { id: 10, name: "Alexis Mac Allister", number: 10, position: Midfielder, rating: 8.4, season: (25, 4, 6, 90, 2050), saves: None, tackles: Some(47), cards: (6, 0), captain: false, vice: false, starting: true },
        Row { id: 11, name: "Curtis Jones", number: 17, position: Midfielder, rating: 7.6, season: (18, 2, 3, 91, 1120), saves: None, tackles: Some(21), cards: (2, 0), captain: false, vice: false, starting: false },
        Row { id: 12, name: "Ryan Gravenberch", number: 38, position: Midfielder, rating: 8.2, season: (26, 3, 4, 92, 2280), saves: None, tackles: Some(44), cards: (3, 0), captain: false, vice: false, starting: true },
        Row { id: 13, name: "Wataru Endo", number: 3, position: Midfielder, rating: 7.1, season: (9, 0, 0, 88, 410), saves: None, tackles: Some(12), cards: (1, 0), captain: false, vice: false, starting: false },
        Row { id: 14, name: "Mohamed Salah", number: 11, position: Forward, rating: 8.9, season: (27, 15, 10, 81, 2330), saves: None, tackles: None, cards: (0, 0), captain: false, vice: true, starting: true },
        Row { id: 15, name: "Cody Gakpo", number: 18, position: Forward, rating: 8.0, season: (25, 9, 5, 80, 1980), saves: None, tackles: None, cards: (1, 0), captain: false, vice: false, starting: true },
        Row { id: 16, name: "Alexander Isak", number: 9, position: Forward, rating: 8.2, season: (20, 11, 3, 78, 1640), saves: None, tackles: None, cards: (1, 0), captain: false, vice: false, starting: true },
        Row { id: 17, name: "Hugo Ekitike", number: 22, position: Forward, rating: 7.9, season: (22, 8, 4, 77, 1450), saves: None, tackles: None, cards: (2, 0), captain: false, vice: false, starting: false },
        Row { id: 18, name: "Federico Chiesa", number: 14, position: Forward, rating: 7.2, season: (12, 2, 2, 79, 560), saves: None, tackles: None, cards: (0, 0), captain: false, vice: false, starting: false },
    ];
    rows.into_iter().map(Player::from).collect()
}

pub fn sample_season_record() -> SeasonRecord {
    SeasonRecord {
        club_name: "Liverpool FC".to_string(),
        season: "2025/26".to_string(),
        wins: 24,
        draws: 8,
        losses: 6,
        goals_scored: 78,
        goals_conceded: 32,
        avg_possession: 62,
        shots_per_game: 18,
        pass_accuracy: 87,
    }
}

pub fn sample_club_stats() -> ClubStats {
    let results = [
        ("MUN", MatchOutcome::Win, 3),
        ("CHE", MatchOutcome::Win, 2),
        ("ARS", MatchOutcome::Draw, 1),
        ("MCI", MatchOutcome::Win, 2),
        ("TOT", MatchOutcome::Win, 4),
        ("NEW", MatchOutcome::Draw, 1),
    ];
    let performance = [
        ("Attack", 92),
        ("Defense", 85),
        ("Possession", 88),
        ("Passing", 90),
        ("Pressing", 87),
        ("Discipline", 82),
    ];
    let monthly = [
        ("Aug", 12, 4),
        ("Sep", 15, 5),
        ("Oct", 13, 6),
        ("Nov", 16, 5),
        ("Dec", 11, 7),
        ("Jan", 11, 5),
    ];
    ClubStats {
        recent_results: results
            .into_iter()
            .map(|(opponent, outcome, goals)| MatchResult {
                opponent: opponent.to_string(),
                outcome,
                goals,
            })
            .collect(),
        performance: performance
            .into_iter()
            .map(|(category, value)| PerformanceMetric {
                category: category.to_string(),
                value,
            })
            .collect(),
        monthly_goals: monthly
            .into_iter()
            .map(|(month, scored, conceded)| MonthlyGoals {
                month: month.to_string(),
                scored,
                conceded,
            })
            .collect(),
    }
}
