use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Dealership {
    pub id: Uuid,
    pub cnpj: String,
    pub corporate_name: String,
    pub created_at: DateTime<Utc>,
}
