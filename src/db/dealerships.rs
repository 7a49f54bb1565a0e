use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Dealership;

pub async fn create(
    pool: &PgPool,
    cnpj: &str,
    corporate_name: &str,
) -> Result<Dealership, sqlx::Error> {
    sqlx::query_as::<_, Dealership>(
        "INSERT INTO dealerships (cnpj, corporate_name) VALUES ($1, $2) RETURNING *",
    )
    .bind(cnpj)
    .bind(corporate_name)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Dealership>, sqlx::Error> {
    sqlx::query_as::<_, Dealership>("SELECT * FROM dealerships WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Dealership>, sqlx::Error> {
    sqlx::query_as::<_, Dealership>("SELECT * FROM dealerships ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}
