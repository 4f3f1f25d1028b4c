//! Fixed deployment configuration shared by the store, the notifier
//! and every viewer. The date index is the only cross-component
//! reference for a meeting slot, so this sequence must stay identical
//! everywhere once a deployment has seeded.

/// Ordered meeting-date labels. An index into this slice is the
/// "date index" used by the API and the push channel.
pub const MEETING_DATES: &[&str] = &[
    "3/7", "3/14", "3/21", "3/28", "4/4", "4/11", "4/18", "4/25",
];

/// Roster seeded on first startup. Order here is irrelevant —
/// snapshots are always re-sorted by name.
pub const SEED_NAMES: &[&str] = &[
    "김서준", "이하은", "박지호", "최수아", "정도윤", "강예린", "나라", "가영",
];

pub fn date_count() -> usize {
    MEETING_DATES.len()
}
