use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Role, User, UserProfile};

const PROFILE_COLUMNS: &str = "u.id, u.name, u.email, u.role, u.dealership_id, \
     d.corporate_name AS dealership_name, u.created_at";

pub async fn create(
    pool: &PgPool,
    dealership_id: Uuid,
    email: &str,
    password_hash: &str,
    name: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (dealership_id, email, password_hash, name, role)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(dealership_id)
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(role)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn profile_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users u
         JOIN dealerships d ON d.id = u.dealership_id
         WHERE u.email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn profile_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users u
         JOIN dealerships d ON d.id = u.dealership_id
         WHERE u.id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users u
         JOIN dealerships d ON d.id = u.dealership_id
         ORDER BY u.created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn list_by_dealership(
    pool: &PgPool,
    dealership_id: Uuid,
) -> Result<Vec<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users u
         JOIN dealerships d ON d.id = u.dealership_id
         WHERE u.dealership_id = $1
         ORDER BY u.created_at DESC"
    ))
    .bind(dealership_id)
    .fetch_all(pool)
    .await
}

/// Persist every mutable field of the record in a single statement.
pub async fn update(pool: &PgPool, user: &User) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users
         SET dealership_id = $2, email = $3, password_hash = $4, name = $5, role = $6,
             updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .bind(user.dealership_id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.name)
    .bind(user.role)
    .fetch_one(pool)
    .await
}

pub async fn update_role(pool: &PgPool, id: Uuid, role: Role) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET role = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
