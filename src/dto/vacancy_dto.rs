use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::null_as_empty;
use crate::models::vacancy::Vacancy;
use crate::utils::extract::JsonPayload;

/// Body of `POST /projects/{id}/vacancies` and `PUT /vacancies/{id}`.
/// `project_id` always comes from the URL or the stored row, never from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VacancyPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
}

impl JsonPayload for VacancyPayload {
    const INVALID_MESSAGE: &'static str = "Invalid vacancy data format";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VacancyResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub field: String,
    pub country: String,
    pub experience: String,
}

impl From<Vacancy> for VacancyResponse {
    fn from(vacancy: Vacancy) -> Self {
        Self {
            id: vacancy.id,
            project_id: vacancy.project_id,
            name: vacancy.name,
            description: vacancy.description,
            field: vacancy.field,
            country: vacancy.country,
            experience: vacancy.experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_id_in_body_is_not_part_of_payload() {
        let payload: VacancyPayload =
            serde_json::from_value(json!({ "project_id": 999, "name": "Eng" })).unwrap();
        assert_eq!(payload.name, "Eng");
        assert_eq!(payload.field, "");
    }
}
