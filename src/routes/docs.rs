use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::{
    project_dto::{ProjectPayload, ProjectResponse},
    vacancy_dto::{VacancyPayload, VacancyResponse},
    ErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trood Projects API",
        description = "Projects and the vacancies that belong to them."
    ),
    paths(
        crate::routes::project::list_projects,
        crate::routes::project::create_project,
        crate::routes::project::get_project,
        crate::routes::project::update_project,
        crate::routes::project::delete_project,
        crate::routes::vacancy::list_project_vacancies,
        crate::routes::vacancy::create_vacancy,
        crate::routes::vacancy::get_vacancy,
        crate::routes::vacancy::update_vacancy,
        crate::routes::vacancy::delete_vacancy,
    ),
    components(schemas(
        ProjectPayload,
        ProjectResponse,
        VacancyPayload,
        VacancyResponse,
        ErrorResponse
    )),
    tags(
        (name = "projects", description = "Project management"),
        (name = "vacancies", description = "Vacancies scoped by project")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
