// src/services/student_service.rs
use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentPayload},
};
use sqlx::SqlitePool;

pub async fn find_all_students(db_pool: &SqlitePool) -> AppResult<Vec<Student>> {
    tracing::debug!("Buscando todos os alunos...");
    let students = sqlx::query_as::<_, Student>("SELECT id, name, age, class FROM students ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} alunos.", students.len());
    Ok(students)
}

pub async fn find_student_by_id(db_pool: &SqlitePool, student_id: i64) -> AppResult<Student> {
    tracing::debug!("Buscando aluno por ID: {}", student_id);
    sqlx::query_as::<_, Student>("SELECT id, name, age, class FROM students WHERE id = ?1")
        .bind(student_id)
        .fetch_optional(db_pool)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn create_student(db_pool: &SqlitePool, payload: StudentPayload) -> AppResult<Student> {
    tracing::info!("Criando aluno: {} ({})", payload.name, payload.class_name);
    let id = sqlx::query("INSERT INTO students (name, age, class) VALUES (?1, ?2, ?3)")
        .bind(&payload.name)
        .bind(payload.age)
        .bind(&payload.class_name)
        .execute(db_pool)
        .await?
        .last_insert_rowid();

    tracing::info!("✅ Aluno {} criado.", id);
    Ok(Student {
        id,
        name: payload.name,
        age: payload.age,
        class_name: payload.class_name,
    })
}

/// Copia apenas name, age e class. O id nunca é alterado.
pub async fn update_student(db_pool: &SqlitePool, student_id: i64, payload: &StudentPayload) -> AppResult<()> {
    tracing::info!("Atualizando aluno: {}", student_id);
    let rows_affected = sqlx::query(
        r#"
        UPDATE students
        SET
            name = ?1,
            age = ?2,
            class = ?3
        WHERE id = ?4
        "#,
    )
    .bind(&payload.name)
    .bind(payload.age)
    .bind(&payload.class_name)
    .bind(student_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: aluno {} não encontrado.", student_id);
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn delete_student(db_pool: &SqlitePool, student_id: i64) -> AppResult<()> {
    tracing::info!("Removendo aluno: {}", student_id);
    let rows_affected = sqlx::query("DELETE FROM students WHERE id = ?1")
        .bind(student_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: aluno {} não encontrado.", student_id);
        return Err(AppError::NotFound);
    }
    Ok(())
}
