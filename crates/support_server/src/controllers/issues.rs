use actix_web::{
    web::{self, Data, Json},
    HttpResponse, Result,
};
use log::{error, info};
use serde::Deserialize;

use crate::controllers::{ErrorResponse, OkResponse};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    #[serde(alias = "Description")]
    pub description: String,
}

/// POST /api/problemas-pagamento
pub async fn record_payment_issue(
    app_state: Data<AppState>,
    request: Json<DescriptionRequest>,
) -> Result<HttpResponse> {
    let description = request.into_inner().description;
    match app_state.store.record_payment_issue(&description).await {
        Ok(()) => {
            info!("recorded payment issue");
            Ok(HttpResponse::Ok().json(OkResponse::yes()))
        }
        Err(e) => {
            error!("failed to record payment issue: {e}");
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}

/// POST /api/duvidas-produto
pub async fn record_product_question(
    app_state: Data<AppState>,
    request: Json<DescriptionRequest>,
) -> Result<HttpResponse> {
    let description = request.into_inner().description;
    match app_state.store.record_product_question(&description).await {
        Ok(()) => {
            info!("recorded product question");
            Ok(HttpResponse::Ok().json(OkResponse::yes()))
        }
        Err(e) => {
            error!("failed to record product question: {e}");
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/problemas-pagamento", web::post().to(record_payment_issue))
        .route("/duvidas-produto", web::post().to(record_product_question));
}
