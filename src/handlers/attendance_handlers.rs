use actix_web::{web, HttpResponse};

use crate::config;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::ws::ConnectionRegistry;
use crate::models::attendance;
use crate::models::attendance::types::{ToggleRequest, ToggleResponse};

/// GET /api/attendance — the full roster with mark arrays, name-sorted.
pub async fn snapshot(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let rows = attendance::list_snapshot(&conn, config::date_count())?;
    Ok(HttpResponse::Ok().json(rows))
}

/// POST /api/attendance/toggle — flip one mark, then fan the change
/// out to every live viewer. The originator gets the event too and
/// reconciles its optimistic state from it like everyone else.
pub async fn toggle(
    pool: web::Data<DbPool>,
    registry: web::Data<ConnectionRegistry>,
    body: web::Json<ToggleRequest>,
) -> Result<HttpResponse, AppError> {
    let participant_id: i64 = body.participant_id.parse().map_err(|_| {
        AppError::Validation(format!(
            "unresolvable participantId {:?}",
            body.participant_id
        ))
    })?;

    let conn = pool.get()?;
    let new_status =
        attendance::toggle(&conn, participant_id, body.date_index, config::date_count())?;

    registry.broadcast_update(participant_id, body.date_index, new_status);

    Ok(HttpResponse::Ok().json(ToggleResponse {
        success: true,
        new_status,
    }))
}
