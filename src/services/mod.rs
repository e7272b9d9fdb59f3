pub mod project_service;
pub mod vacancy_service;
