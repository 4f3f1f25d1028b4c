//! Local view state held by one connected viewer.
//!
//! Transport-free: the embedding front end feeds it the snapshot
//! fetch result, local toggle clicks and push-channel events, and
//! renders whatever it holds. The bundled web front end in
//! static/index.html keeps its state the same way.

use crate::models::attendance::ParticipantAttendance;

/// Connection phase of a viewer. `Loading` only exists between
/// construction and the first snapshot result. There is no automatic
/// reconnection, so `Offline` is terminal for this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Connected,
    Offline,
}

/// Result of an optimistic local toggle. `celebrate` is set on the
/// absent-to-present edge only; the front end shows its transient
/// toast on that edge and nothing else hangs off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalToggle {
    pub new_status: u8,
    pub celebrate: bool,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    phase: Phase,
    roster: Vec<ParticipantAttendance>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            phase: Phase::Loading,
            roster: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &[ParticipantAttendance] {
        &self.roster
    }

    /// Successful initial fetch: replace local state wholesale.
    pub fn apply_snapshot(&mut self, snapshot: Vec<ParticipantAttendance>) {
        self.roster = snapshot;
        self.phase = Phase::Connected;
    }

    /// Failed initial fetch: degrade to a synthetic all-absent roster
    /// built from the fixed name list and flag the view disconnected.
    /// Synthetic ids are negative so a stray toggle can never resolve
    /// server-side.
    pub fn fall_back_offline(&mut self, names: &[&str], dates: usize) {
        let mut roster: Vec<ParticipantAttendance> = names
            .iter()
            .enumerate()
            .map(|(i, name)| ParticipantAttendance {
                id: -(i as i64) - 1,
                name: (*name).to_string(),
                attendance: vec![0; dates],
            })
            .collect();
        roster.sort_by(|a, b| a.name.cmp(&b.name));
        self.roster = roster;
        self.phase = Phase::Offline;
    }

    /// Optimistic local flip, applied before the toggle request is
    /// even sent. Unknown coordinates are ignored and return `None`.
    pub fn toggle_local(&mut self, participant_id: i64, date_index: usize) -> Option<LocalToggle> {
        let row = self.roster.iter_mut().find(|p| p.id == participant_id)?;
        let mark = row.attendance.get_mut(date_index)?;
        *mark = if *mark == 0 { 1 } else { 0 };
        Some(LocalToggle {
            new_status: *mark,
            celebrate: *mark == 1,
        })
    }

    /// Push-channel event: the server value always overwrites the
    /// local one, whatever optimistic state is in flight. Events for
    /// coordinates this viewer does not know are dropped.
    pub fn apply_event(&mut self, participant_id: i64, date_index: usize, status: u8) {
        if let Some(row) = self.roster.iter_mut().find(|p| p.id == participant_id) {
            if let Some(mark) = row.attendance.get_mut(date_index) {
                *mark = status;
            }
        }
    }
}
