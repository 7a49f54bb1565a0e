use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Dealership;

/// Role is a stored classification only; no authorization policy hangs off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum Role {
    Owner,
    Admin,
    Manager,
    Assistant,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-facing shape: user plus the dealership it belongs to, never the hash.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub dealership_id: Uuid,
    pub dealership_name: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn from_parts(user: User, dealership: &Dealership) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            dealership_id: dealership.id,
            dealership_name: dealership.corporate_name.clone(),
            created_at: user.created_at,
        }
    }
}
