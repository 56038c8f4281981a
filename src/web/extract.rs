// src/web/extract.rs
use crate::error::{AppError, AppResult};
use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Corpo JSON que pode faltar, vir mal formado ou ser literalmente `null`.
/// Os handlers recebem isto e chamam [`require_body`] antes de tocar na DB.
pub type JsonBody<T> = Result<Json<Option<T>>, JsonRejection>;

pub fn require_body<T>(body: JsonBody<T>) -> AppResult<T> {
    match body {
        Ok(Json(Some(value))) => Ok(value),
        Ok(Json(None)) => {
            tracing::debug!("Corpo do pedido é null.");
            Err(AppError::BadRequest)
        }
        Err(rejection) => {
            tracing::debug!("Corpo do pedido rejeitado: {}", rejection.body_text());
            Err(AppError::BadRequest)
        }
    }
}

/// 201 Created com `Location` a apontar para o GET por id.
pub fn created<T: Serialize>(location: String, entity: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(entity)).into_response()
}
