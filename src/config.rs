// src/config.rs
use crate::error::{AppError, AppResult};
use axum::http::HeaderValue;
use std::{env, net::SocketAddr};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuração lida do ambiente.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Única origem autorizada para pedidos cross-origin (frontend).
    pub cors_allowed_origin: HeaderValue,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Lê do ambiente. O `.env` já foi carregado em `main`.
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let origin = env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into());
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = env::var("PORT").ok();

        Self::build(database_url, &origin, &host, port.as_deref())
    }

    fn build(database_url: String, origin: &str, host: &str, port: Option<&str>) -> AppResult<Self> {
        let cors_allowed_origin = HeaderValue::from_str(origin)
            .map_err(|e| AppError::InvalidConfig(format!("CORS_ALLOWED_ORIGIN '{}': {}", origin, e)))?;

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| AppError::InvalidConfig(format!("PORT '{}': {}", p, e)))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InvalidConfig(format!("HOST '{}': {}", host, e)))?;

        Ok(Self {
            database_url,
            cors_allowed_origin,
            bind_addr,
        })
    }
}
