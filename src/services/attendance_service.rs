// src/services/attendance_service.rs
use crate::{
    error::AppResult,
    models::attendance::{Attendance, AttendancePayload},
};
use sqlx::SqlitePool;

/// Lista todas as marcações de presença, sem filtros.
pub async fn find_all_attendance(db_pool: &SqlitePool) -> AppResult<Vec<Attendance>> {
    tracing::debug!("Buscando todas as presenças...");
    let rows = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, student_id, date, status
        FROM attendance
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontradas {} presenças.", rows.len());
    Ok(rows)
}

/// Regista uma presença. O `student_id` não é validado contra a tabela de alunos.
pub async fn mark_attendance(db_pool: &SqlitePool, payload: AttendancePayload) -> AppResult<Attendance> {
    tracing::info!(
        "Marcando presença: aluno {} em {} ({})",
        payload.student_id,
        payload.date,
        payload.status
    );
    let id = sqlx::query("INSERT INTO attendance (student_id, date, status) VALUES (?1, ?2, ?3)")
        .bind(payload.student_id)
        .bind(payload.date)
        .bind(&payload.status)
        .execute(db_pool)
        .await?
        .last_insert_rowid();

    Ok(Attendance {
        id,
        student_id: payload.student_id,
        date: payload.date,
        status: payload.status,
    })
}
