pub mod attendance_handlers;
pub mod ws;
