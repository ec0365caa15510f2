use anyhow::{Context, Result};
use order_dashboard::{
    dashboard::{DynNotifier, OrderWatcher, TerminalBell},
    handler::AppRouter,
    state::AppState,
};
use shared::{
    config::{Config, ConnectionPool, create_admin_client},
    utils::{Telemetry, init_logger},
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "order-dashboard";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::new(SERVICE_NAME, config.otel_endpoint.as_deref())
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.logger_provider(),
        telemetry.service_name(),
        config.dev_mode,
        config.enable_file_log,
    );

    let pool = create_admin_client(config.db_max_conn)
        .context("Failed to create elevated store client")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let notifier: DynNotifier = Arc::new(TerminalBell);
    let state = AppState::new(pool, &config, notifier);
    let dashboard = state.dashboard.clone();

    if let Err(e) = dashboard.load().await {
        warn!("Initial order load failed, continuing with an empty list: {e}");
    }

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let watcher = OrderWatcher::new(dashboard, config.poll_interval).spawn(shutdown_rx);

    info!("✅ Application setup completed successfully.");

    let served = AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server");

    info!("Shutting down background tasks...");
    let _ = shutdown_tx.send(());
    if let Err(e) = watcher.await {
        error!("Order watcher terminated abnormally: {e}");
    }

    telemetry.shutdown()?;

    served
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
