pub mod queries;
pub mod types;

pub use queries::{list_snapshot, seed, toggle};
pub use types::ParticipantAttendance;
