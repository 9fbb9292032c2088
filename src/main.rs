use std::sync::Arc;

use marquee::{
    AppState, config::Config, db, router,
    service::{ReferencePolicy, ScheduleService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,marquee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    db::seed(&db).await?;

    let schedules = ScheduleService::new(db, ReferencePolicy::Permissive);
    let state = Arc::new(AppState { config: config.clone(), schedules });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
