use std::sync::Arc;

use anyhow::{Context, Result};
use bank_api::{
    database::{self, PostgresStorage, Storage},
    routes::make_app,
    AppState, Config,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::init()?;
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Connecting to PostgreSQL...");
    let pool = database::connect_sqlx(&config.db_url)
        .await
        .context("Could not connect to the database")?;
    info!("Connected to PostgreSQL!");

    let storage = PostgresStorage::new(pool);
    storage
        .init()
        .await
        .context("Could not create the account table")?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Could not bind {}", config.listen_addr))?;
    info!("Server listening on {}", config.listen_addr);

    let state = Arc::new(AppState::new(Arc::new(storage)));
    axum::serve(listener, make_app(state)).await?;
    Ok(())
}
