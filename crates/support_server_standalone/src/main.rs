use std::path::PathBuf;

use support_core::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting standalone support backend...");

    // config.toml first, then APP_PORT / SUPPORT_DB_PATH overrides
    let config = Config::new();
    let db_path = PathBuf::from(&config.db_path);

    if let Err(e) = support_server::server::run(db_path, config.port).await {
        tracing::error!("Failed to run support backend: {}", e);
        std::process::exit(1);
    }
}
