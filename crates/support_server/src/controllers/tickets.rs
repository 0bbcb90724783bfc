use actix_web::{
    web::{self, Data, Json},
    HttpResponse, Result,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use support_core::SubmittedTicket;

use crate::controllers::ErrorResponse;
use crate::server::AppState;

/// Ticket submission; older clients send PascalCase keys, the aliases
/// accept both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(alias = "Protocol")]
    pub protocol: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "ProblemType")]
    pub problem_type: String,
    #[serde(alias = "Description", default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
struct TicketCreatedResponse {
    ok: bool,
    protocolo: String,
    message: &'static str,
}

/// POST /api/chamados
pub async fn create_ticket(
    app_state: Data<AppState>,
    request: Json<TicketRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let required = [
        &request.protocol,
        &request.name,
        &request.email,
        &request.problem_type,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        warn!("rejected ticket with blank required fields");
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Campos obrigatórios vazios"))
        );
    }

    let ticket = SubmittedTicket {
        protocol: request.protocol.trim().to_string(),
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        problem_type: request.problem_type.trim().to_string(),
        description: request.description.trim().to_string(),
    };

    match app_state.store.save_ticket(&ticket).await {
        Ok(true) => {
            info!("ticket {} saved", ticket.protocol);
            Ok(HttpResponse::Ok().json(TicketCreatedResponse {
                ok: true,
                protocolo: ticket.protocol,
                message: "Chamado registrado com sucesso",
            }))
        }
        Ok(false) => {
            warn!("duplicate ticket protocol {}", ticket.protocol);
            Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Protocolo já registrado")))
        }
        Err(e) => {
            error!("failed to save ticket {}: {e}", ticket.protocol);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/chamados", web::post().to(create_ticket));
}
