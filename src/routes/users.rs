use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{Role, User, UserProfile};
use crate::password;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub dealership_id: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub dealership_id: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateRole {
    pub role: Role,
}

impl UpdateUser {
    /// Overwrite the stored record with every present, non-empty field.
    /// Empty strings count as absent, so an empty password means "keep the
    /// current hash". Returns the plaintext password to re-hash, if any.
    fn apply(&self, user: &mut User) -> Option<&str> {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            user.name = name.to_string();
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            user.email = email.to_string();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

pub async fn get_by_email(
    State(state): State<SharedState>,
    Path(email): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = db::users::profile_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(profile))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<UserProfile>>, AppError> {
    let users = db::users::list_all(&state.pool).await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<UserProfile>, AppError> {
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "A user with this email already exists".to_string(),
        ));
    }

    let dealership = db::dealerships::find_by_id(&state.pool, req.dealership_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Dealership not found".to_string()))?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // The unique index on email is the authoritative guard; the lookup above
    // only catches the common case before hashing work is done.
    let user = db::users::create(
        &state.pool,
        dealership.id,
        &req.email,
        &pw_hash,
        &req.name,
        req.role,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A user with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tracing::info!(user_id = %user.id, "user created");

    Ok(Json(UserProfile::from_parts(user, &dealership)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(email): Path<String>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<UserProfile>, AppError> {
    let mut user = db::users::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // A user may keep its own email; only someone else's is a conflict.
    if let Some(new_email) = req.email.as_deref().filter(|e| !e.is_empty()) {
        if let Some(existing) = db::users::find_by_email(&state.pool, new_email).await? {
            if existing.id != user.id {
                return Err(AppError::Conflict(
                    "A user with this email already exists".to_string(),
                ));
            }
        }
    }

    if let Some(plaintext) = req.apply(&mut user) {
        user.password_hash = password::hash(plaintext).map_err(AppError::Internal)?;
    }

    // The dealership is always re-resolved, even when nothing else changed.
    let dealership = db::dealerships::find_by_id(&state.pool, req.dealership_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Dealership not found".to_string()))?;
    user.dealership_id = dealership.id;

    let user = db::users::update(&state.pool, &user).await.map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A user with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(UserProfile::from_parts(user, &dealership)))
}

pub async fn update_role(
    State(state): State<SharedState>,
    Path(email): Path<String>,
    Json(req): Json<UpdateRole>,
) -> Result<Json<UserProfile>, AppError> {
    let user = db::users::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    db::users::update_role(&state.pool, user.id, req.role).await?;

    let profile = db::users::profile_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(profile))
}

pub async fn remove(
    State(state): State<SharedState>,
    Path(email): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = db::users::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    db::users::delete(&state.pool, user.id).await?;

    tracing::info!(user_id = %user.id, "user deleted");

    Ok(Json(serde_json::json!({ "message": "User removed" })))
}
