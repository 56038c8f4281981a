// src/services/teacher_service.rs
use crate::{
    error::{AppError, AppResult},
    models::teacher::{Teacher, TeacherPayload},
};
use sqlx::SqlitePool;

pub async fn find_all_teachers(db_pool: &SqlitePool) -> AppResult<Vec<Teacher>> {
    tracing::debug!("Buscando todos os professores...");
    let teachers = sqlx::query_as::<_, Teacher>("SELECT id, name FROM teachers ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(teachers)
}

pub async fn find_teacher_by_id(db_pool: &SqlitePool, teacher_id: i64) -> AppResult<Teacher> {
    tracing::debug!("Buscando professor por ID: {}", teacher_id);
    sqlx::query_as::<_, Teacher>("SELECT id, name FROM teachers WHERE id = ?1")
        .bind(teacher_id)
        .fetch_optional(db_pool)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn create_teacher(db_pool: &SqlitePool, payload: TeacherPayload) -> AppResult<Teacher> {
    tracing::info!("Criando professor: {}", payload.name);
    let id = sqlx::query("INSERT INTO teachers (name) VALUES (?1)")
        .bind(&payload.name)
        .execute(db_pool)
        .await?
        .last_insert_rowid();

    tracing::info!("✅ Professor {} criado.", id);
    Ok(Teacher { id, name: payload.name })
}

// Só o nome é atualizável
pub async fn update_teacher(db_pool: &SqlitePool, teacher_id: i64, payload: &TeacherPayload) -> AppResult<()> {
    tracing::info!("Atualizando professor: {}", teacher_id);
    let rows_affected = sqlx::query("UPDATE teachers SET name = ?1 WHERE id = ?2")
        .bind(&payload.name)
        .bind(teacher_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: professor {} não encontrado.", teacher_id);
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn delete_teacher(db_pool: &SqlitePool, teacher_id: i64) -> AppResult<()> {
    tracing::info!("Removendo professor: {}", teacher_id);
    let rows_affected = sqlx::query("DELETE FROM teachers WHERE id = ?1")
        .bind(teacher_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: professor {} não encontrado.", teacher_id);
        return Err(AppError::NotFound);
    }
    Ok(())
}
