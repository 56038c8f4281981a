// src/web/attendance_handlers.rs
use crate::{
    error::AppResult,
    models::attendance::{Attendance, AttendancePayload, MessageResponse},
    services::attendance_service,
    web::extract::{require_body, JsonBody},
};
use axum::{extract::State, Json};
use sqlx::SqlitePool;

// GET /attendance
pub async fn list_attendance(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Attendance>>> {
    Ok(Json(attendance_service::find_all_attendance(&db_pool).await?))
}

// POST /attendance -> 200 com mensagem (não 201: não há GET por id)
pub async fn mark_attendance(
    State(db_pool): State<SqlitePool>,
    body: JsonBody<AttendancePayload>,
) -> AppResult<Json<MessageResponse>> {
    let payload = require_body(body)?;
    attendance_service::mark_attendance(&db_pool, payload).await?;
    Ok(Json(MessageResponse {
        message: "Attendance marked successfully".to_string(),
    }))
}
