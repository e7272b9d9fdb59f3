use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trood_backend::{
    config::{get_config, init_config},
    database::{
        pool::{create_pool, run_migrations},
        seed::seed_projects,
    },
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let pool = create_pool().await?;
    run_migrations(&pool).await?;

    if config.seed_on_startup {
        seed_projects(&pool).await;
    }

    let app = routes::create_router(AppState::new(pool), config)?;

    let addr: SocketAddr = config.server_address.parse()?;
    info!(
        "Server listening on {} with CORS enabled for origin: {}",
        addr, config.cors_allowed_origin
    );
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
