// src/web/teacher_handlers.rs
use crate::{
    error::AppResult,
    models::teacher::{Teacher, TeacherPayload},
    services::teacher_service,
    web::extract::{created, require_body, JsonBody},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

pub async fn list_teachers(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Teacher>>> {
    Ok(Json(teacher_service::find_all_teachers(&db_pool).await?))
}

pub async fn get_teacher(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<Teacher>> {
    Ok(Json(teacher_service::find_teacher_by_id(&db_pool, id).await?))
}

pub async fn create_teacher(
    State(db_pool): State<SqlitePool>,
    body: JsonBody<TeacherPayload>,
) -> AppResult<impl IntoResponse> {
    let payload = require_body(body)?;
    let teacher = teacher_service::create_teacher(&db_pool, payload).await?;
    Ok(created(format!("/teachers/{}", teacher.id), teacher))
}

pub async fn update_teacher(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    body: JsonBody<TeacherPayload>,
) -> AppResult<StatusCode> {
    let payload = require_body(body)?;
    teacher_service::update_teacher(&db_pool, id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_teacher(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    teacher_service::delete_teacher(&db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
