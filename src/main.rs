mod api_doc;
mod app;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod routes;

use anyhow::Context;
use config::Config;
use cors::CorsPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sistema_cloud_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("sistema-cloud-api {} starting", app::APP_VERSION);

    let config = Config::from_env()?;
    config.log_startup();

    let listener = app::bind(&config)
        .await
        .inspect_err(|e| tracing::error!("{:#}", e))?;
    let router = app::build_router(CorsPolicy::permissive());

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
