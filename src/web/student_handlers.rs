// src/web/student_handlers.rs
use crate::{
    error::AppResult,
    models::student::{Student, StudentPayload},
    services::student_service,
    web::extract::{created, require_body, JsonBody},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

pub async fn list_students(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Student>>> {
    Ok(Json(student_service::find_all_students(&db_pool).await?))
}

pub async fn get_student(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<Student>> {
    Ok(Json(student_service::find_student_by_id(&db_pool, id).await?))
}

pub async fn create_student(
    State(db_pool): State<SqlitePool>,
    body: JsonBody<StudentPayload>,
) -> AppResult<impl IntoResponse> {
    let payload = require_body(body)?;
    let student = student_service::create_student(&db_pool, payload).await?;
    Ok(created(format!("/students/{}", student.id), student))
}

pub async fn update_student(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    body: JsonBody<StudentPayload>,
) -> AppResult<StatusCode> {
    let payload = require_body(body)?;
    student_service::update_student(&db_pool, id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_student(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    student_service::delete_student(&db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
