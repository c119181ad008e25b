use anyhow::Context;

use habit_tracker_api::config::Config;
use habit_tracker_api::router::build_router;
use habit_tracker_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "habit_tracker_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        aws_region = %config.aws_region,
        dynamodb_table = %config.dynamodb_table,
        "Using in-memory habit store"
    );

    let addr = config.listen_addr();
    let app = build_router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
