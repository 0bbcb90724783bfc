//! HTTP gateway adapter
//!
//! Consumes the support backend's `/api` endpoints. Any non-success status
//! and any transport error surface as the same recoverable `GatewayError`.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use support_core::{Config, FreightQuoteRequest, FreightQuoteResponse, SubmittedTicket};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::SupportGateway;

/// Ok-style envelope returned by the recording endpoints.
#[derive(Debug, Deserialize)]
struct OkEnvelope {
    ok: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderQueryBody<'a> {
    order_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancellationBody<'a> {
    order_number: &'a str,
    status: &'a str,
}

#[derive(Debug, Serialize)]
struct DescriptionBody<'a> {
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketBody<'a> {
    protocol: &'a str,
    name: &'a str,
    email: &'a str,
    problem_type: &'a str,
    description: &'a str,
}

pub struct HttpSupportGateway {
    client: Client,
    base_url: String,
}

impl HttpSupportGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_record<B: Serialize>(&self, path: &str, body: &B) -> GatewayResult<bool> {
        let url = self.endpoint(path);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("POST {url} returned {status}");
            return Err(GatewayError::Unavailable(status.as_u16()));
        }
        let envelope: OkEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(envelope.ok)
    }
}

#[async_trait]
impl SupportGateway for HttpSupportGateway {
    async fn quote_freight(
        &self,
        request: FreightQuoteRequest,
    ) -> GatewayResult<FreightQuoteResponse> {
        let url = self.endpoint("/api/consultas/frete");
        debug!("POST {url} cep={}", request.cep);
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("POST {url} returned {status}");
            return Err(GatewayError::Unavailable(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    async fn record_freight_query(&self, cep: &str) -> GatewayResult<bool> {
        // The quote endpoint records the consultation server-side; there is
        // no separate recording endpoint on the HTTP surface.
        debug!("freight query for CEP {cep} is recorded by the quote endpoint");
        Ok(true)
    }

    async fn record_order_query(&self, order_number: &str) -> GatewayResult<bool> {
        self.post_record("/api/consultas/pedido", &OrderQueryBody { order_number })
            .await
    }

    async fn record_cancellation(&self, order_number: &str, status: &str) -> GatewayResult<bool> {
        self.post_record(
            "/api/cancelamentos",
            &CancellationBody {
                order_number,
                status,
            },
        )
        .await
    }

    async fn record_payment_issue(&self, description: &str) -> GatewayResult<bool> {
        self.post_record("/api/problemas-pagamento", &DescriptionBody { description })
            .await
    }

    async fn record_product_question(&self, description: &str) -> GatewayResult<bool> {
        self.post_record("/api/duvidas-produto", &DescriptionBody { description })
            .await
    }

    async fn save_ticket(&self, ticket: &SubmittedTicket) -> GatewayResult<bool> {
        self.post_record(
            "/api/chamados",
            &TicketBody {
                protocol: &ticket.protocol,
                name: &ticket.name,
                email: &ticket.email,
                problem_type: &ticket.problem_type,
                description: &ticket.description,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let gateway = HttpSupportGateway::new("http://localhost:5099/");
        assert_eq!(gateway.base_url(), "http://localhost:5099");
        assert_eq!(
            gateway.endpoint("/api/health"),
            "http://localhost:5099/api/health"
        );
    }

    #[test]
    fn test_ticket_body_uses_camel_case_keys() {
        let body = TicketBody {
            protocol: "CH202601011200001234",
            name: "Ana",
            email: "ana@x.com",
            problem_type: "produto",
            description: "quebrado",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("problemType").is_some());
        assert!(json.get("problem_type").is_none());
    }
}
