pub mod docs;
pub mod health;
pub mod project;
pub mod vacancy;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{config::Config, error::Result, middleware::cors::single_origin_cors, AppState};

/// `/projects` plus the vacancy sub-resources grouped under a project.
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(project::list_projects).post(project::create_project),
        )
        .route(
            "/projects/:id",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/projects/:id/vacancies",
            get(vacancy::list_project_vacancies).post(vacancy::create_vacancy),
        )
}

pub fn vacancy_routes() -> Router<AppState> {
    Router::new().route(
        "/vacancies/:id",
        get(vacancy::get_vacancy)
            .put(vacancy::update_vacancy)
            .delete(vacancy::delete_vacancy),
    )
}

pub fn create_router(state: AppState, config: &Config) -> Result<Router> {
    let cors = single_origin_cors(&config.cors_allowed_origin, config.cors_max_age())?;

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(project_routes())
        .merge(vacancy_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
