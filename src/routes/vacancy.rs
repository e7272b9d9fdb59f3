use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        vacancy_dto::{VacancyPayload, VacancyResponse},
        ErrorResponse,
    },
    error::{Error, Result},
    utils::{extract::JsonBody, validation::parse_id},
    AppState,
};

#[utoipa::path(
    get,
    path = "/projects/{id}/vacancies",
    tag = "vacancies",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Vacancies of the project, empty if none", body = [VacancyResponse]),
        (status = 400, description = "Invalid project ID", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_project_vacancies(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse> {
    let project_id = parse_id(&project_id, "project")?;
    let vacancies = state.vacancy_service.list_by_project(project_id).await?;
    let items: Vec<VacancyResponse> = vacancies.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/projects/{id}/vacancies",
    tag = "vacancies",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = VacancyPayload,
    responses(
        (status = 201, description = "Vacancy created", body = VacancyResponse),
        (status = 400, description = "Invalid project ID or payload", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    payload: std::result::Result<JsonBody<VacancyPayload>, Error>,
) -> Result<impl IntoResponse> {
    let project_id = parse_id(&project_id, "project")?;
    // 404 wins over a malformed body.
    state.vacancy_service.ensure_project_exists(project_id).await?;
    let JsonBody(payload) = payload?;

    let vacancy = state.vacancy_service.create(project_id, payload).await?;
    tracing::info!(vacancy_id = vacancy.id, project_id, "Vacancy created");
    Ok((StatusCode::CREATED, Json(VacancyResponse::from(vacancy))))
}

#[utoipa::path(
    get,
    path = "/vacancies/{id}",
    tag = "vacancies",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = VacancyResponse),
        (status = 400, description = "Invalid vacancy ID", body = ErrorResponse),
        (status = 404, description = "Vacancy not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "vacancy")?;
    let vacancy = state.vacancy_service.get_by_id(id).await?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    put,
    path = "/vacancies/{id}",
    tag = "vacancies",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = VacancyPayload,
    responses(
        (status = 200, description = "Vacancy replaced", body = VacancyResponse),
        (status = 400, description = "Invalid vacancy ID or payload", body = ErrorResponse),
        (status = 404, description = "Vacancy not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<JsonBody<VacancyPayload>, Error>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "vacancy")?;
    let JsonBody(payload) = payload?;
    let vacancy = state.vacancy_service.update(id, payload).await?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    delete,
    path = "/vacancies/{id}",
    tag = "vacancies",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy deleted"),
        (status = 400, description = "Invalid vacancy ID", body = ErrorResponse),
        (status = 404, description = "Vacancy not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "vacancy")?;
    state.vacancy_service.delete(id).await?;
    tracing::info!(vacancy_id = id, "Vacancy deleted");
    Ok(StatusCode::NO_CONTENT)
}
