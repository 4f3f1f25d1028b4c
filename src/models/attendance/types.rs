use serde::{Deserialize, Serialize};

/// One roster row in the snapshot: a participant joined with the full
/// mark array, one entry per configured meeting date (0 = absent,
/// 1 = present, indexed by date index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantAttendance {
    #[serde(serialize_with = "id_as_string")]
    pub id: i64,
    pub name: String,
    pub attendance: Vec<u8>,
}

// The front end treats ids as opaque strings.
fn id_as_string<S: serde::Serializer>(id: &i64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(id)
}

/// Toggle request body. `participantId` arrives as a string and is
/// resolved to a row id server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub participant_id: String,
    pub date_index: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub success: bool,
    pub new_status: u8,
}
