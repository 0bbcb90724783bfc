use actix_web::{
    web::{self, Data, Json},
    HttpResponse, Result,
};
use log::{error, info};
use serde::Deserialize;

use crate::controllers::{ErrorResponse, OkResponse};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryRequest {
    #[serde(alias = "OrderNumber")]
    pub order_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationRequest {
    #[serde(alias = "OrderNumber")]
    pub order_number: String,
    #[serde(alias = "Status")]
    pub status: Option<String>,
}

/// POST /api/consultas/pedido
pub async fn record_order_query(
    app_state: Data<AppState>,
    request: Json<OrderQueryRequest>,
) -> Result<HttpResponse> {
    let order_number = request.into_inner().order_number;
    match app_state.store.record_order_query(&order_number).await {
        Ok(()) => {
            info!("recorded order query #{order_number}");
            Ok(HttpResponse::Ok().json(OkResponse::yes()))
        }
        Err(e) => {
            error!("failed to record order query #{order_number}: {e}");
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}

/// POST /api/cancelamentos
///
/// A missing or blank status defaults to "solicitado".
pub async fn record_cancellation(
    app_state: Data<AppState>,
    request: Json<CancellationRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let status = match request.status.as_deref() {
        Some(status) if !status.trim().is_empty() => status.trim().to_string(),
        _ => "solicitado".to_string(),
    };

    match app_state
        .store
        .record_cancellation(&request.order_number, &status)
        .await
    {
        Ok(()) => {
            info!(
                "recorded cancellation #{} ({status})",
                request.order_number
            );
            Ok(HttpResponse::Ok().json(OkResponse::yes()))
        }
        Err(e) => {
            error!(
                "failed to record cancellation #{}: {e}",
                request.order_number
            );
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/consultas/pedido", web::post().to(record_order_query))
        .route("/cancelamentos", web::post().to(record_cancellation));
}
