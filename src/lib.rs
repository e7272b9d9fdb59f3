pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{project_service::ProjectService, vacancy_service::VacancyService};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub project_service: ProjectService,
    pub vacancy_service: VacancyService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let project_service = ProjectService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());

        Self {
            pool,
            project_service,
            vacancy_service,
        }
    }
}
