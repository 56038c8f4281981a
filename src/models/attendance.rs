// src/models/attendance.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Uma linha da tabela `attendance`.
/// `student_id` aponta para um aluno, mas a referência não é validada.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate, // Guardada como TEXT "YYYY-MM-DD"
    pub status: String,  // "present", "absent", ...
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    pub student_id: i64,
    pub date: NaiveDate,
    pub status: String,
}

// Resposta de POST /attendance
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
