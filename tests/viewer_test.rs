use rollcall::models::attendance::ParticipantAttendance;
use rollcall::viewer::{Phase, ViewState};

fn row(id: i64, name: &str, attendance: Vec<u8>) -> ParticipantAttendance {
    ParticipantAttendance {
        id,
        name: name.to_string(),
        attendance,
    }
}

#[test]
fn test_starts_loading_with_empty_roster() {
    let state = ViewState::new();
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.roster().is_empty());
}

#[test]
fn test_snapshot_replaces_state_wholesale() {
    let mut state = ViewState::new();
    state.apply_snapshot(vec![row(1, "가영", vec![0, 1])]);
    assert_eq!(state.phase(), Phase::Connected);
    assert_eq!(state.roster().len(), 1);

    // A second fetch (e.g. after reconnect) fully replaces, not merges
    state.apply_snapshot(vec![row(2, "나라", vec![0, 0]), row(1, "가영", vec![1, 1])]);
    assert_eq!(state.roster().len(), 2);
    assert_eq!(state.roster()[1].attendance, vec![1, 1]);
}

#[test]
fn test_fallback_builds_sorted_all_absent_roster() {
    let mut state = ViewState::new();
    state.fall_back_offline(&["나라", "가영"], 3);

    assert_eq!(state.phase(), Phase::Offline);
    let names: Vec<&str> = state.roster().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["가영", "나라"]);
    for p in state.roster() {
        assert_eq!(p.attendance, vec![0, 0, 0]);
        assert!(p.id < 0, "synthetic ids must never collide with server ids");
    }
}

#[test]
fn test_local_toggle_is_optimistic_and_celebrates_on_present() {
    let mut state = ViewState::new();
    state.apply_snapshot(vec![row(1, "가영", vec![0, 1])]);

    let up = state.toggle_local(1, 0).expect("known coordinate");
    assert_eq!(up.new_status, 1);
    assert!(up.celebrate);

    let down = state.toggle_local(1, 1).expect("known coordinate");
    assert_eq!(down.new_status, 0);
    assert!(!down.celebrate);

    assert_eq!(state.roster()[0].attendance, vec![1, 0]);
}

#[test]
fn test_local_toggle_unknown_coordinates_is_ignored() {
    let mut state = ViewState::new();
    state.apply_snapshot(vec![row(1, "가영", vec![0, 0])]);

    assert!(state.toggle_local(99, 0).is_none());
    assert!(state.toggle_local(1, 5).is_none());
    assert_eq!(state.roster()[0].attendance, vec![0, 0]);
}

#[test]
fn test_push_event_overwrites_optimistic_state() {
    let mut state = ViewState::new();
    state.apply_snapshot(vec![row(1, "가영", vec![0, 0])]);

    // Optimistic flip to present, then the authoritative event says
    // absent (e.g. a concurrent toggle from another viewer landed last)
    state.toggle_local(1, 0);
    state.apply_event(1, 0, 0);
    assert_eq!(state.roster()[0].attendance[0], 0);

    // And the reverse interleaving
    state.apply_event(1, 1, 1);
    assert_eq!(state.roster()[0].attendance[1], 1);
}

#[test]
fn test_push_event_for_unknown_coordinates_is_dropped() {
    let mut state = ViewState::new();
    state.apply_snapshot(vec![row(1, "가영", vec![0, 0])]);

    state.apply_event(99, 0, 1);
    state.apply_event(1, 7, 1);
    assert_eq!(state.roster()[0].attendance, vec![0, 0]);
}
