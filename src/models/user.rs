// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um utilizador lido da tabela 'users'
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64, // SQLite INTEGER -> i64
    pub name: String,
    pub email: String, // Chave do login (NÃO é única na tabela)
    pub password_hash: String, // Opaco: nunca é verificado
    pub role: String, // "admin", "teacher", "student", ...
}

/// Corpo de POST/PUT /users. Um `id` enviado no corpo é ignorado.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

// Corpo de POST /auth/login. Um campo 'password' extra é simplesmente ignorado.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
}
