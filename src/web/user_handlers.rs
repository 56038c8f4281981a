// src/web/user_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserPayload},
    services::user_service,
    web::extract::{created, require_body, JsonBody},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

// GET /users
pub async fn list_users(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::find_all_users(&db_pool).await?;
    Ok(Json(users))
}

// GET /users/{id}
pub async fn get_user(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<User>> {
    let user = user_service::find_user_by_id(&db_pool, id).await?;
    Ok(Json(user))
}

// POST /users
pub async fn create_user(
    State(db_pool): State<SqlitePool>,
    body: JsonBody<UserPayload>,
) -> AppResult<impl IntoResponse> {
    let payload = require_body(body)?;
    let user = user_service::create_user(&db_pool, payload).await?;
    Ok(created(format!("/users/{}", user.id), user))
}

// PUT /users/{id}
pub async fn update_user(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    body: JsonBody<UserPayload>,
) -> AppResult<StatusCode> {
    // Só os utilizadores têm esta verificação: id tem de ser positivo
    if id <= 0 {
        tracing::debug!("PUT /users/{}: id inválido", id);
        return Err(AppError::BadRequest);
    }
    let payload = require_body(body)?;
    user_service::update_user(&db_pool, id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /users/{id}
pub async fn delete_user(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    user_service::delete_user(&db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
