use std::{path::PathBuf, sync::Arc};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::controllers::{freight, health, issues, orders, tickets};
use crate::store::{SqliteSupportStore, SupportStore};

pub struct AppState {
    pub store: Arc<dyn SupportStore>,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::config)
            .configure(freight::config)
            .configure(orders::config)
            .configure(issues::config)
            .configure(tickets::config),
    );
}

pub async fn run(db_path: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting support backend...");

    let store: Arc<dyn SupportStore> = Arc::new(SqliteSupportStore::new(db_path));
    store
        .init()
        .await
        .map_err(|e| format!("Failed to initialize database: {e}"))?;

    let app_state = web::Data::new(AppState { store });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("0.0.0.0:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Support backend listening on http://0.0.0.0:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
