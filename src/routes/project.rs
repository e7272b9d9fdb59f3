use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        project_dto::{ProjectPayload, ProjectResponse},
        ErrorResponse,
    },
    error::{Error, Result},
    utils::{extract::JsonBody, validation::parse_id},
    AppState,
};

#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let projects = state.project_service.list().await?;
    let items: Vec<ProjectResponse> = projects.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProjectPayload>,
) -> Result<impl IntoResponse> {
    let project = state.project_service.create(payload).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 400, description = "Invalid project ID", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "project")?;
    let project = state.project_service.get_by_id(id).await?;
    Ok(Json(ProjectResponse::from(project)))
}

#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Project replaced", body = ProjectResponse),
        (status = 400, description = "Invalid project ID or payload", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<JsonBody<ProjectPayload>, Error>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "project")?;
    let JsonBody(payload) = payload?;
    let project = state.project_service.update(id, payload).await?;
    Ok(Json(ProjectResponse::from(project)))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 400, description = "Invalid project ID", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Project still referenced by vacancies", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "project")?;
    state.project_service.delete(id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
