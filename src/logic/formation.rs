//! Formation editor: pitch slots bound to roster players.
//!
//! Every slot is either empty or holds one player id. Unknown player or slot ids
//! never fail; the operation is simply not applied and `false` is returned.

use crate::logic::roster::PlayerRepository;
use crate::models::{AssignPolicy, FormationSnapshot, PitchSlot, Player, PlayerId, SlotView};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;

/// A named slot layout with its default bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<PitchSlot>,
}

impl Formation {
    /// Default 4-3-3 with the usual starters on the pitch.
    pub fn four_three_three() -> Self {
        let slots = vec![
            PitchSlot::new("gk", 50.0, 90.0, Some(1)),
            PitchSlot::new("rb", 75.0, 72.0, Some(4)),
            PitchSlot::new("rcb", 60.0, 75.0, Some(3)),
            PitchSlot::new("lcb", 40.0, 75.0, Some(6)),
            PitchSlot::new("lb", 25.0, 72.0, Some(5)),
            PitchSlot::new("rcm", 60.0, 50.0, Some(9)),
            PitchSlot::new("cm", 50.0, 45.0, Some(12)),
            PitchSlot::new("lcm", 40.0, 50.0, Some(10)),
            PitchSlot::new("rw", 70.0, 20.0, Some(14)),
            PitchSlot::new("st", 50.0, 15.0, Some(16)),
            PitchSlot::new("lw", 30.0, 20.0, Some(15)),
        ];
        Self {
            name: "4-3-3".to_string(),
            slots,
        }
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::four_three_three()
    }
}

/// Slot-to-player bindings for one editing session.
#[derive(Clone, Debug)]
pub struct SlotAssignmentModel {
    roster: Arc<PlayerRepository>,
    formation: String,
    slots: Vec<PitchSlot>,
    policy: AssignPolicy,
    updated_at: DateTime<Utc>,
}

impl SlotAssignmentModel {
    /// Start from the default 4-3-3.
    pub fn new(roster: Arc<PlayerRepository>, policy: AssignPolicy) -> Self {
        Self::with_formation(roster, Formation::default(), policy)
    }

    /// Start from `formation`. Default bindings to players missing from the roster
    /// are dropped so every occupied slot resolves.
    pub fn with_formation(roster: Arc<PlayerRepository>, formation: Formation, policy: AssignPolicy) -> Self {
        let mut slots = formation.slots;
        for slot in &mut slots {
            if let Some(id) = slot.player_id {
                if !roster.contains(id) {
                    log::warn!("Default player {} for slot '{}' is not in the roster", id, slot.id);
                    slot.player_id = None;
                }
            }
        }
        Self {
            roster,
            formation: formation.name,
            slots,
            policy,
            updated_at: Utc::now(),
        }
    }

    pub fn roster(&self) -> &PlayerRepository {
        &self.roster
    }

    pub fn formation_name(&self) -> &str {
        &self.formation
    }

    pub fn policy(&self) -> AssignPolicy {
        self.policy
    }

    pub fn slots(&self) -> &[PitchSlot] {
        &self.slots
    }

    pub fn slot(&self, slot_id: &str) -> Option<&PitchSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// First slot holding `player_id`, if any.
    pub fn slot_of(&self, player_id: PlayerId) -> Option<&PitchSlot> {
        self.slots.iter().find(|s| s.player_id == Some(player_id))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Time of the last applied assign/unassign (or of creation).
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Put `player_id` into `slot_id`, replacing whoever was there.
    ///
    /// With `AssignPolicy::Move` the player is first taken out of any other slot.
    /// Returns false (and changes nothing) for an unknown player or slot.
    pub fn assign(&mut self, player_id: PlayerId, slot_id: &str) -> bool {
        if !self.roster.contains(player_id) {
            log::debug!("assign: unknown player {}", player_id);
            return false;
        }
        let Some(target) = self.slots.iter().position(|s| s.id == slot_id) else {
            log::debug!("assign: unknown slot '{}'", slot_id);
            return false;
        };

        if self.policy == AssignPolicy::Move {
            for (i, slot) in self.slots.iter_mut().enumerate() {
                if i != target && slot.player_id == Some(player_id) {
                    slot.player_id = None;
                }
            }
        }
        self.slots[target].player_id = Some(player_id);
        self.updated_at = Utc::now();
        true
    }

    /// Empty `slot_id`. Returns true only if a player was removed.
    pub fn unassign(&mut self, slot_id: &str) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) else {
            return false;
        };
        if slot.player_id.take().is_none() {
            return false;
        }
        self.updated_at = Utc::now();
        true
    }

    /// Player bound to `slot_id`, resolved through the roster.
    pub fn occupant(&self, slot_id: &str) -> Option<&Player> {
        self.slot(slot_id)
            .and_then(|s| s.player_id)
            .and_then(|id| self.roster.by_id(id))
    }

    /// Roster players not on the pitch, in roster order.
    pub fn available_players(&self) -> Vec<&Player> {
        let used: HashSet<PlayerId> = self.slots.iter().filter_map(|s| s.player_id).collect();
        self.roster
            .all()
            .iter()
            .filter(|p| !used.contains(&p.id))
            .collect()
    }

    /// Owned copy of the board for serialization.
    pub fn snapshot(&self) -> FormationSnapshot {
        let slots = self
            .slots
            .iter()
            .map(|s| SlotView {
                id: s.id.clone(),
                x: s.x,
                y: s.y,
                player: s.player_id.and_then(|id| self.roster.by_id(id)).cloned(),
            })
            .collect();
        FormationSnapshot {
            formation: self.formation.clone(),
            policy: self.policy,
            slots,
            available_players: self.available_players().into_iter().cloned().collect(),
            updated_at: self.updated_at,
        }
    }
}
