// src/error.rs
use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Configuração inválida: {0}")]
    InvalidConfig(String),

    // Corpo nulo/ilegível ou id inválido
    #[error("Pedido inválido")]
    BadRequest,

    #[error("Registo não encontrado")]
    NotFound,

    // Login: email não registado
    #[error("Credenciais inválidas")]
    InvalidCredentials,
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Erros do cliente: sem detalhe no corpo
            AppError::BadRequest => {
                tracing::debug!("Pedido rejeitado: {}", self);
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::NotFound => {
                tracing::debug!("Pedido rejeitado: {}", self);
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
            }
            // Tudo o resto é falha do servidor: loga o detalhe, devolve mensagem genérica
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error accessing data.").into_response()
            }
            AppError::EnvVarError(_) | AppError::InvalidConfig(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error.").into_response()
            }
        }
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
