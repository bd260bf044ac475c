//! Integration tests for the roster: lookups, filters, CSV import.

use club_dashboard_web::{Player, PlayerRepository, Position, PositionFilter, RosterError};

const CSV_HEADER: &str = "id,name,squad_number,position,rating,appearances,goals,assists,pass_accuracy,minutes_played,saves,tackles,yellow_cards,red_cards,is_captain,is_vice_captain,is_starting";

#[test]
fn sample_roster_keeps_insertion_order() {
    let r = PlayerRepository::sample();
    assert_eq!(r.len(), 18);
    let ids: Vec<u32> = r.all().iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=18).collect::<Vec<_>>());
}

#[test]
fn by_id_finds_players_and_reports_absent() {
    let r = PlayerRepository::sample();
    assert_eq!(r.by_id(3).map(|p| p.name.as_str()), Some("Virgil van Dijk"));
    assert!(r.by_id(0).is_none());
    assert!(r.by_id(99999).is_none());
}

#[test]
fn filter_by_position_returns_only_that_position_in_order() {
    let r = PlayerRepository::sample();
    for pos in Position::ALL {
        let filtered = r.filter_by_position(pos);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|p| p.position == pos));
        let expected: Vec<u32> = r.all().iter().filter(|p| p.position == pos).map(|p| p.id).collect();
        let got: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(got, expected);
        assert!(got.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn filter_by_position_can_be_empty() {
    let r = PlayerRepository::new(vec![Player::new(1, "Solo Keeper", 1, Position::Goalkeeper)]);
    assert!(r.filter_by_position(Position::Forward).is_empty());
}

#[test]
fn filter_by_starting_returns_eleven() {
    let r = PlayerRepository::sample();
    let starters = r.filter_by_starting();
    assert_eq!(starters.len(), 11);
    assert!(starters.iter().all(|p| p.is_starting));
}

#[test]
fn tab_filter_all_returns_everyone() {
    let r = PlayerRepository::sample();
    assert_eq!(r.filter(PositionFilter::All).len(), r.len());
    assert_eq!(
        r.filter(PositionFilter::Only(Position::Goalkeeper)).len(),
        r.filter_by_position(Position::Goalkeeper).len()
    );
}

#[test]
fn tab_filter_matches_single_players() {
    let keeper = Player::new(1, "Keeper", 1, Position::Goalkeeper);
    assert!(PositionFilter::All.matches(&keeper));
    assert!(PositionFilter::Only(Position::Goalkeeper).matches(&keeper));
    assert!(!PositionFilter::Only(Position::Defender).matches(&keeper));

    let r = PlayerRepository::sample();
    let defenders = r.filter(PositionFilter::Only(Position::Defender));
    assert!(defenders.iter().all(|p| p.position == Position::Defender));
    assert_eq!(defenders.len(), r.filter_by_position(Position::Defender).len());
}

#[test]
fn duplicate_ids_keep_first_record() {
    let r = PlayerRepository::new(vec![
        Player::new(7, "First", 7, Position::Midfielder),
        Player::new(7, "Second", 8, Position::Forward),
        Player::new(8, "Third", 9, Position::Defender),
    ]);
    assert_eq!(r.len(), 2);
    assert_eq!(r.by_id(7).map(|p| p.name.as_str()), Some("First"));
    assert_eq!(r.by_id(8).map(|p| p.name.as_str()), Some("Third"));
}

#[test]
fn captaincy_flags_in_sample() {
    let r = PlayerRepository::sample();
    let captains: Vec<_> = r.all().iter().filter(|p| p.is_captain).collect();
    let vice: Vec<_> = r.all().iter().filter(|p| p.is_vice_captain).collect();
    assert_eq!(captains.len(), 1);
    assert_eq!(vice.len(), 1);
    assert_eq!(vice[0].surname(), "Salah");
}

#[test]
fn loads_roster_from_csv() {
    let csv = format!(
        "{CSV_HEADER}\n\
         1,Test Keeper,1,GK,7.5,10,0,0,80,900,30,,1,0,false,false,true\n\
         2, Test Striker ,9,FWD,8.1,12,7,2,76,1000,,,0,0,true,false,true\n"
    );
    let r = PlayerRepository::from_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(r.len(), 2);
    let keeper = r.by_id(1).unwrap();
    assert_eq!(keeper.position, Position::Goalkeeper);
    assert_eq!(keeper.stats.saves, Some(30));
    assert_eq!(keeper.stats.tackles, None);
    assert_eq!(keeper.stats.discipline(), "1Y");
    let striker = r.by_id(2).unwrap();
    assert_eq!(striker.name, "Test Striker");
    assert!(striker.is_captain);
    assert_eq!(striker.stats.goals, 7);
}

#[test]
fn csv_with_bad_position_is_rejected() {
    let csv = format!("{CSV_HEADER}\n1,Someone,1,SW,7.0,1,0,0,80,90,,,0,0,false,false,false\n");
    let err = PlayerRepository::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::Parse { .. }));
}

#[test]
fn csv_without_players_is_empty_error() {
    let err = PlayerRepository::from_csv_reader(CSV_HEADER.as_bytes()).unwrap_err();
    assert_eq!(err, RosterError::Empty);
}

#[test]
fn missing_csv_file_is_reported() {
    let err = PlayerRepository::from_csv_path("does/not/exist.csv").unwrap_err();
    assert!(err.to_string().contains("exist.csv"));
}
