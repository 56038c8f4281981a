// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserPayload},
};
use sqlx::SqlitePool;

/// Busca todos os utilizadores (tabela vazia -> Vec vazio).
pub async fn find_all_users(db_pool: &SqlitePool) -> AppResult<Vec<User>> {
    tracing::debug!("Buscando todos os utilizadores...");
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} utilizadores.", users.len());
    Ok(users)
}

/// Busca um utilizador pelo ID. `AppError::NotFound` se não existir.
pub async fn find_user_by_id(db_pool: &SqlitePool, user_id: i64) -> AppResult<User> {
    tracing::debug!("Buscando utilizador por ID: {}", user_id);
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db_pool)
    .await?
    .ok_or_else(|| {
        tracing::debug!("Utilizador {} não encontrado.", user_id);
        AppError::NotFound
    })
}

/// Busca o primeiro utilizador (menor id) com este email.
///
/// O email não é único na tabela. Se houver duplicados, fica o de menor id
/// e é emitido um aviso.
pub async fn find_user_by_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por email: {}", email);
    let mut matches = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role
        FROM users
        WHERE email = ?1
        ORDER BY id ASC
        LIMIT 2
        "#,
    )
    .bind(email)
    .fetch_all(db_pool)
    .await?;

    if matches.len() > 1 {
        tracing::warn!(
            "⚠️ Email partilhado por vários utilizadores; a usar o id {}.",
            matches[0].id
        );
    }
    matches.truncate(1);
    Ok(matches.pop())
}

/// Insere um utilizador e devolve-o com o id gerado pela base.
pub async fn create_user(db_pool: &SqlitePool, payload: UserPayload) -> AppResult<User> {
    tracing::debug!("Criando utilizador: {}", payload.email);
    let id = sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash, role)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.password_hash)
    .bind(&payload.role)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("✅ Utilizador {} criado.", id);
    Ok(User {
        id,
        name: payload.name,
        email: payload.email,
        password_hash: payload.password_hash,
        role: payload.role,
    })
}

/// Substitui TODOS os campos (exceto o id) do utilizador.
pub async fn update_user(db_pool: &SqlitePool, user_id: i64, payload: &UserPayload) -> AppResult<()> {
    tracing::info!("Atualizando dados para user: {}", user_id);
    let rows_affected = sqlx::query(
        r#"
        UPDATE users
        SET
            name = ?1,
            email = ?2,
            password_hash = ?3,
            role = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.password_hash)
    .bind(&payload.role)
    .bind(user_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    // 0 linhas afetadas = o user_id não existe
    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: utilizador {} não encontrado.", user_id);
        Err(AppError::NotFound)
    } else {
        tracing::info!("✅ Dados atualizados para user: {}", user_id);
        Ok(())
    }
}

/// Remove o utilizador (remoção física).
pub async fn delete_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    tracing::info!("Removendo utilizador: {}", user_id);
    let rows_affected = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: utilizador {} não encontrado.", user_id);
        return Err(AppError::NotFound);
    }
    tracing::info!("🗑️ Utilizador {} removido.", user_id);
    Ok(())
}
