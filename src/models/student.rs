// src/models/student.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    // 'class' é palavra reservada em Rust
    #[serde(rename = "class")]
    #[sqlx(rename = "class")]
    pub class_name: String,
}

/// Corpo de POST/PUT /students.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: i64,
    #[serde(rename = "class")]
    pub class_name: String,
}
