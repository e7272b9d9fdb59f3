use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::null_as_empty;
use crate::models::project::Project;
use crate::utils::extract::JsonPayload;

/// Body of `POST /projects` and `PUT /projects/{id}`. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deadline: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
}

impl JsonPayload for ProjectPayload {
    const INVALID_MESSAGE: &'static str = "Invalid input data format";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub experience: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            deadline: project.deadline,
            experience: project.experience,
        }
    }
}
