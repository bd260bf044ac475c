//! Integration tests for the formation board: assign, unassign, available players.

use club_dashboard_web::{
    AssignPolicy, Formation, PitchSlot, Player, PlayerRepository, Position, SlotAssignmentModel,
};
use std::collections::HashSet;
use std::sync::Arc;

fn board(policy: AssignPolicy) -> SlotAssignmentModel {
    SlotAssignmentModel::new(Arc::new(PlayerRepository::sample()), policy)
}

fn occupant_id(m: &SlotAssignmentModel, slot: &str) -> Option<u32> {
    m.occupant(slot).map(|p| p.id)
}

/// available ∪ occupants must be the full roster with no player counted twice.
fn assert_partition(m: &SlotAssignmentModel) {
    let mut seen = HashSet::new();
    for p in m.available_players() {
        assert!(seen.insert(p.id), "player {} listed twice", p.id);
    }
    for s in m.slots() {
        if let Some(id) = s.player_id {
            assert!(seen.insert(id), "player {} both on pitch and available, or in two slots", id);
        }
    }
    let roster: HashSet<u32> = m.roster().all().iter().map(|p| p.id).collect();
    assert_eq!(seen, roster);
}

#[test]
fn default_formation_fills_eleven_slots() {
    let m = board(AssignPolicy::Move);
    assert_eq!(m.formation_name(), "4-3-3");
    assert_eq!(m.slots().len(), 11);
    assert_eq!(m.occupied_count(), 11);
    assert_eq!(occupant_id(&m, "gk"), Some(1));
    assert_eq!(occupant_id(&m, "st"), Some(16));
    // 18-man squad, 11 on the pitch
    assert_eq!(m.available_players().len(), m.roster().len() - 11);
    assert_partition(&m);
}

#[test]
fn full_eleven_leaves_no_available_players() {
    let starters: Vec<Player> = PlayerRepository::sample()
        .filter_by_starting()
        .into_iter()
        .cloned()
        .collect();
    let m = SlotAssignmentModel::new(Arc::new(PlayerRepository::new(starters)), AssignPolicy::Move);
    assert_eq!(m.occupied_count(), 11);
    assert!(m.available_players().is_empty());
}

#[test]
fn unassign_striker_frees_one_player() {
    let mut m = board(AssignPolicy::Move);
    let before = m.available_players().len();
    assert!(m.unassign("st"));
    let available = m.available_players();
    assert_eq!(available.len(), before + 1);
    assert!(available.iter().any(|p| p.id == 16));
    assert!(m.occupant("st").is_none());
    assert_partition(&m);
}

#[test]
fn unassign_is_idempotent() {
    let mut m = board(AssignPolicy::Move);
    for slot in ["gk", "lb", "cm", "st"] {
        m.unassign(slot);
        assert!(m.occupant(slot).is_none());
        assert!(!m.unassign(slot), "second unassign of {slot} should be a no-op");
        assert!(m.occupant(slot).is_none());
    }
    assert_eq!(m.occupied_count(), 7);
}

#[test]
fn unknown_player_is_a_no_op() {
    let mut m = board(AssignPolicy::Move);
    let before: Vec<PitchSlot> = m.slots().to_vec();
    assert!(!m.assign(99999, "st"));
    assert_eq!(m.slots(), before.as_slice());
}

#[test]
fn unknown_slot_is_a_no_op() {
    let mut m = board(AssignPolicy::Move);
    let before: Vec<PitchSlot> = m.slots().to_vec();
    assert!(!m.assign(17, "sweeper"));
    assert!(!m.unassign("sweeper"));
    assert!(m.occupant("sweeper").is_none());
    assert!(m.slot("sweeper").is_none());
    assert_eq!(m.slots(), before.as_slice());
}

#[test]
fn assign_bench_player_replaces_occupant() {
    let mut m = board(AssignPolicy::Move);
    assert!(m.assign(17, "st"));
    assert_eq!(occupant_id(&m, "st"), Some(17));
    // Replaced striker goes back to the bench list, new one leaves it
    let available: Vec<u32> = m.available_players().iter().map(|p| p.id).collect();
    assert!(available.contains(&16));
    assert!(!available.contains(&17));
    assert_partition(&m);
}

#[test]
fn move_policy_clears_previous_slot() {
    let mut m = board(AssignPolicy::Move);
    m.unassign("lw");
    m.unassign("rw");
    assert!(m.assign(17, "lw"));
    assert!(m.assign(17, "rw"));
    assert_eq!(occupant_id(&m, "rw"), Some(17));
    assert!(m.occupant("lw").is_none());
    assert_eq!(m.slot_of(17).map(|s| s.id.as_str()), Some("rw"));
    assert!(!m.available_players().iter().any(|p| p.id == 17));
    assert_partition(&m);
}

#[test]
fn duplicate_policy_keeps_previous_slot() {
    let mut m = board(AssignPolicy::Duplicate);
    assert!(m.assign(17, "lw"));
    assert!(m.assign(17, "rw"));
    assert_eq!(occupant_id(&m, "rw"), Some(17));
    assert_eq!(occupant_id(&m, "lw"), Some(17));
    assert!(!m.available_players().iter().any(|p| p.id == 17));
}

#[test]
fn reassigning_same_slot_keeps_player_once() {
    let mut m = board(AssignPolicy::Move);
    assert!(m.assign(14, "rw"));
    assert_eq!(occupant_id(&m, "rw"), Some(14));
    assert_eq!(m.occupied_count(), 11);
    assert_partition(&m);
}

#[test]
fn partition_holds_over_a_gesture_sequence() {
    let mut m = board(AssignPolicy::Move);
    let steps: [(&str, Option<u32>); 9] = [
        ("st", None),
        ("st", Some(17)),
        ("cm", Some(16)),
        ("gk", Some(2)),
        ("lb", Some(8)),
        ("rb", Some(8)),
        ("lcb", None),
        ("lcb", Some(7)),
        ("rcm", Some(99)),
    ];
    for (slot, player) in steps {
        match player {
            Some(id) => {
                m.assign(id, slot);
            }
            None => {
                m.unassign(slot);
            }
        }
        assert_partition(&m);
    }
    assert_eq!(occupant_id(&m, "rb"), Some(8));
    assert!(m.occupant("lb").is_none());
    assert_eq!(occupant_id(&m, "rcm"), Some(9));
}

#[test]
fn defaults_missing_from_roster_start_empty() {
    let mut keeper = Player::new(1, "Only Keeper", 1, Position::Goalkeeper);
    keeper.is_starting = true;
    let roster = Arc::new(PlayerRepository::new(vec![keeper]));
    let m = SlotAssignmentModel::with_formation(roster, Formation::four_three_three(), AssignPolicy::Move);
    assert_eq!(m.occupied_count(), 1);
    assert_eq!(occupant_id(&m, "gk"), Some(1));
    assert!(m.occupant("st").is_none());
}

#[test]
fn snapshot_resolves_occupants() {
    let mut m = board(AssignPolicy::Move);
    m.unassign("cm");
    let snap = m.snapshot();
    assert_eq!(snap.formation, "4-3-3");
    assert_eq!(snap.policy, AssignPolicy::Move);
    assert_eq!(snap.slots.len(), 11);
    let cm = snap.slots.iter().find(|s| s.id == "cm").unwrap();
    assert!(cm.player.is_none());
    let gk = snap.slots.iter().find(|s| s.id == "gk").unwrap();
    assert_eq!(gk.player.as_ref().map(|p| p.name.as_str()), Some("Alisson Becker"));
    assert!(snap.available_players.iter().any(|p| p.id == 12));
    assert_eq!(snap.updated_at, m.updated_at());
}
