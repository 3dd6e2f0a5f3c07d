use inventory_api::{create_router, Config, DbPool};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "inventory_api={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        database_url = %config.database.url,
        listen_addr = %config.listen_addr(),
        "Starting inventory-api"
    );

    let db_pool = DbPool::new(&config.database).await?;

    info!("Running database migrations");
    db_pool.run_migrations().await?;

    let app = create_router(db_pool.inner().clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!(addr = %listener.local_addr()?, "Inventory API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
