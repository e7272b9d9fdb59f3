mod common;

use common::setup_pool;
use trood_backend::database::seed::{seed_projects, seed_projects_from, SeedProject};

async fn project_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT name FROM projects ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn seeds_defaults_into_empty_table_once() {
    let pool = setup_pool().await;

    assert_eq!(seed_projects(&pool).await, 3);
    assert_eq!(
        project_names(&pool).await,
        vec!["Project Alpha", "Project Beta", "Project Gamma"]
    );

    assert_eq!(seed_projects(&pool).await, 0);
    assert_eq!(project_names(&pool).await.len(), 3);
}

#[tokio::test]
async fn skips_when_projects_exist() {
    let pool = setup_pool().await;
    sqlx::query("INSERT INTO projects (name) VALUES ('Existing')")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(seed_projects(&pool).await, 0);
    assert_eq!(project_names(&pool).await, vec!["Existing"]);
}

#[tokio::test]
async fn failed_insert_rolls_back_whole_seed() {
    let pool = setup_pool().await;
    sqlx::query(
        r#"
        CREATE TRIGGER reject_broken BEFORE INSERT ON projects
        WHEN NEW.name = 'Broken'
        BEGIN
            SELECT RAISE(ABORT, 'rejected');
        END
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let projects = [
        SeedProject {
            name: "Fine",
            description: "",
            deadline: "",
            experience: "",
        },
        SeedProject {
            name: "Broken",
            description: "",
            deadline: "",
            experience: "",
        },
    ];

    assert_eq!(seed_projects_from(&pool, &projects).await, 0);
    assert!(project_names(&pool).await.is_empty());
}
