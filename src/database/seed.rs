use crate::error::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct SeedProject {
    pub name: &'static str,
    pub description: &'static str,
    pub deadline: &'static str,
    pub experience: &'static str,
}

pub const DEFAULT_PROJECTS: &[SeedProject] = &[
    SeedProject {
        name: "Project Alpha",
        description: "A cutting-edge AI project",
        deadline: "31.12.2025",
        experience: "5+ years",
    },
    SeedProject {
        name: "Project Beta",
        description: "Next-gen cloud platform",
        deadline: "30.06.2025",
        experience: "3+ years",
    },
    SeedProject {
        name: "Project Gamma",
        description: "Blockchain-based fintech solution",
        deadline: "15.09.2025",
        experience: "4+ years",
    },
];

pub async fn seed_projects(pool: &SqlitePool) -> usize {
    seed_projects_from(pool, DEFAULT_PROJECTS).await
}

/// Inserts `projects` when the table is empty. Never fails: problems are
/// logged and the number of inserted rows (0 when skipped) is returned.
pub async fn seed_projects_from(pool: &SqlitePool, projects: &[SeedProject]) -> usize {
    let count = match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(e) => {
            warn!(error = ?e, "Could not check existing projects count, skipping seeding");
            return 0;
        }
    };

    if count > 0 {
        info!(count, "Projects table already has data, skipping seeding");
        return 0;
    }

    info!("Seeding projects table with sample data");
    match insert_all(pool, projects).await {
        Ok(inserted) => {
            info!(inserted, "Seeded projects table");
            inserted
        }
        Err(e) => {
            warn!(error = ?e, "Project seeding failed, transaction rolled back");
            0
        }
    }
}

async fn insert_all(pool: &SqlitePool, projects: &[SeedProject]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    for project in projects {
        sqlx::query(
            "INSERT INTO projects (name, description, deadline, experience) VALUES (?, ?, ?, ?)",
        )
        .bind(project.name)
        .bind(project.description)
        .bind(project.deadline)
        .bind(project.experience)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(projects.len())
}
