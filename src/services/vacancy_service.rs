use crate::dto::vacancy_dto::VacancyPayload;
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;
use crate::services::project_service::ProjectService;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct VacancyService {
    pool: SqlitePool,
    projects: ProjectService,
}

impl VacancyService {
    pub fn new(pool: SqlitePool) -> Self {
        let projects = ProjectService::new(pool.clone());
        Self { pool, projects }
    }

    /// Empty when the project has no vacancies or does not exist.
    pub async fn list_by_project(&self, project_id: i64) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, project_id, name, description, field, country, experience
            FROM vacancies
            WHERE project_id = ?
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Vacancy> {
        sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, project_id, name, description, field, country, experience
            FROM vacancies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)
    }

    pub async fn ensure_project_exists(&self, project_id: i64) -> Result<()> {
        if self.projects.exists(project_id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Project not found".to_string()))
        }
    }

    /// Inserts under `project_id`. Callers check the project first with
    /// [`ensure_project_exists`](Self::ensure_project_exists); a project removed
    /// in between surfaces as a `Conflict` from the foreign key.
    pub async fn create(&self, project_id: i64, payload: VacancyPayload) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (project_id, name, description, field, country, experience)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, name, description, field, country, experience
            "#,
        )
        .bind(project_id)
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.field)
        .bind(payload.country)
        .bind(payload.experience)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from(e).with_conflict_message("Failed to create vacancy"))?;

        Ok(vacancy)
    }

    /// Replaces the text fields. `project_id` is never touched.
    pub async fn update(&self, id: i64, payload: VacancyPayload) -> Result<Vacancy> {
        sqlx::query_as::<_, Vacancy>(
            r#"
            UPDATE vacancies
            SET
                name = ?,
                description = ?,
                field = ?,
                country = ?,
                experience = ?
            WHERE id = ?
            RETURNING id, project_id, name, description, field, country, experience
            "#,
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.field)
        .bind(payload.country)
        .bind(payload.experience)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM vacancies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> Error {
    Error::NotFound("Vacancy not found".to_string())
}
