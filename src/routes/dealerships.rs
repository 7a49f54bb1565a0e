use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{Dealership, UserProfile};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateDealership {
    pub cnpj: String,
    pub corporate_name: String,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateDealership>,
) -> Result<Json<Dealership>, AppError> {
    let dealership = db::dealerships::create(&state.pool, &req.cnpj, &req.corporate_name)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A dealership with this CNPJ already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(dealership_id = %dealership.id, "dealership created");

    Ok(Json(dealership))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Dealership>, AppError> {
    let dealership = db::dealerships::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Dealership not found".to_string()))?;
    Ok(Json(dealership))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Dealership>>, AppError> {
    let dealerships = db::dealerships::list(&state.pool).await?;
    Ok(Json(dealerships))
}

/// Users of a dealership. An unknown id yields an empty list, not a 404.
pub async fn list_users(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    let users = db::users::list_by_dealership(&state.pool, id).await?;
    Ok(Json(users))
}
