use actix_web::{
    web::{self, Data, Json},
    HttpResponse, Result,
};
use log::warn;
use support_core::FreightQuoteRequest;

use crate::quote;
use crate::server::AppState;

/// POST /api/consultas/frete
///
/// Records the consultation and answers with the estimated quote. A failed
/// recording does not block the quote; an invalid CEP yields a quote body
/// with `success: false` so clients surface the error text as-is.
pub async fn quote_freight(
    app_state: Data<AppState>,
    request: Json<FreightQuoteRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    if let Err(error) = app_state.store.record_freight_query(&request.cep).await {
        warn!("failed to record freight query for {}: {error}", request.cep);
    }

    Ok(HttpResponse::Ok().json(quote::estimate(&request)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/consultas/frete", web::post().to(quote_freight));
}
