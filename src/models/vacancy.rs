use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub field: String,
    pub country: String,
    pub experience: String,
}
