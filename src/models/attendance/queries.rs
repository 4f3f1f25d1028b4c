use rusqlite::{params, Connection, OptionalExtension};

use super::types::ParticipantAttendance;
use crate::errors::AppError;

/// Seed the roster: one participant per name plus one absent mark per
/// (participant, date index) pair, all inside a single transaction.
///
/// Returns `Ok(false)` without touching anything when participants
/// already exist, so startup can call this unconditionally.
pub fn seed(conn: &mut Connection, names: &[&str], dates: usize) -> Result<bool, AppError> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM participants", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(false);
    }

    let tx = conn.transaction()?;
    for name in names {
        tx.execute("INSERT INTO participants (name) VALUES (?1)", params![name])?;
        let participant_id = tx.last_insert_rowid();
        for date_index in 0..dates as i64 {
            tx.execute(
                "INSERT INTO attendance (participant_id, date_index, status) VALUES (?1, ?2, 0)",
                params![participant_id, date_index],
            )?;
        }
    }
    tx.commit()?;
    Ok(true)
}

/// Full roster joined with mark arrays, sorted by display name.
///
/// Every participant gets an array of exactly `dates` entries; a pair
/// with no attendance row reads as absent rather than failing, so a
/// half-seeded participant still renders. Names sort in Unicode
/// code-point order (SQLite's default collation), which matches the
/// locale order for the Hangul roster this deploys with.
pub fn list_snapshot(
    conn: &Connection,
    dates: usize,
) -> Result<Vec<ParticipantAttendance>, AppError> {
    let mut stmt = conn.prepare("SELECT id, name FROM participants ORDER BY name, id")?;
    let participants = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut mark_stmt =
        conn.prepare("SELECT date_index, status FROM attendance WHERE participant_id = ?1")?;

    let mut snapshot = Vec::with_capacity(participants.len());
    for (id, name) in participants {
        let mut attendance = vec![0u8; dates];
        let marks = mark_stmt.query_map(params![id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, u8>(1)?))
        })?;
        for mark in marks {
            let (date_index, status) = mark?;
            if let Ok(i) = usize::try_from(date_index) {
                if i < dates {
                    attendance[i] = status;
                }
            }
        }
        snapshot.push(ParticipantAttendance { id, name, attendance });
    }
    Ok(snapshot)
}

/// Flip one mark and return the new value.
///
/// Validates the participant and index first; on a validation failure
/// nothing is written. A missing attendance row reads as absent and is
/// recreated with the flipped value (self-healing, not the steady
/// state). This is a plain read-then-write with no per-pair locking:
/// concurrent toggles of the same pair are last-write-wins.
pub fn toggle(
    conn: &Connection,
    participant_id: i64,
    date_index: i64,
    dates: usize,
) -> Result<u8, AppError> {
    if date_index < 0 || date_index >= dates as i64 {
        return Err(AppError::Validation(format!(
            "dateIndex {date_index} out of range (0..{dates})"
        )));
    }
    let known: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM participants WHERE id = ?1)",
        params![participant_id],
        |row| row.get(0),
    )?;
    if !known {
        return Err(AppError::Validation(format!(
            "unknown participant {participant_id}"
        )));
    }

    let current: u8 = conn
        .query_row(
            "SELECT status FROM attendance WHERE participant_id = ?1 AND date_index = ?2",
            params![participant_id, date_index],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);
    let new_status = if current == 0 { 1 } else { 0 };

    conn.execute(
        "INSERT OR REPLACE INTO attendance (participant_id, date_index, status) VALUES (?1, ?2, ?3)",
        params![participant_id, date_index, new_status],
    )?;
    Ok(new_status)
}
