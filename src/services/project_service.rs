use crate::dto::project_dto::ProjectPayload;
use crate::error::{Error, Result};
use crate::models::project::Project;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ProjectService {
    pool: SqlitePool,
}

impl ProjectService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Project>> {
        let items = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, deadline, experience FROM projects",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Project> {
        sqlx::query_as::<_, Project>(
            "SELECT id, name, description, deadline, experience FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)
    }

    pub async fn create(&self, payload: ProjectPayload) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, deadline, experience)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, deadline, experience
            "#,
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.deadline)
        .bind(payload.experience)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    /// Overwrites every text field; fields omitted from the payload are stored as empty.
    pub async fn update(&self, id: i64, payload: ProjectPayload) -> Result<Project> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET
                name = ?,
                description = ?,
                deadline = ?,
                experience = ?
            WHERE id = ?
            RETURNING id, name, description, deadline, experience
            "#,
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.deadline)
        .bind(payload.experience)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::from(e).with_conflict_message("Failed to delete project"))?;

        if res.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let found =
            sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(found != 0)
    }
}

fn not_found() -> Error {
    Error::NotFound("Project not found".to_string())
}
