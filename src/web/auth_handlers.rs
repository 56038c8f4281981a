// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse},
    services::user_service,
    web::extract::{require_body, JsonBody},
};
use axum::{extract::State, Json};
use sqlx::SqlitePool;

/// POST /auth/login
///
/// ATENÇÃO: isto é apenas uma consulta de role por email. Nenhuma password é
/// verificada, qualquer email registado entra. Também não há sessão nem token.
pub async fn handle_login(
    State(db_pool): State<SqlitePool>,
    body: JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let request = require_body(body)?;
    tracing::debug!("Tentativa de login para: {}", request.email);

    match user_service::find_user_by_email(&db_pool, &request.email).await? {
        Some(user) => {
            tracing::info!("✅ Login aceite para user {} ({})", user.id, user.role);
            Ok(Json(LoginResponse {
                message: "Login successful".to_string(),
                role: user.role,
            }))
        }
        None => {
            tracing::debug!("Login recusado: email não registado: {}", request.email);
            Err(AppError::InvalidCredentials)
        }
    }
}
