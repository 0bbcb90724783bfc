use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse {
    ok: bool,
    message: &'static str,
}

/// GET /api/health
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        ok: true,
        message: "Servidor está funcionando",
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
