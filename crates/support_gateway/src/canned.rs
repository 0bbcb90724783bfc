//! Canned gateway adapter
//!
//! Always succeeds with fixed data and records nothing. Injecting this in
//! place of the HTTP adapter reproduces the original's offline variant
//! without duplicating any flow logic.

use async_trait::async_trait;
use log::info;
use support_core::{
    CarrierOption, FreightQuoteRequest, FreightQuoteResponse, SubmittedTicket,
};

use crate::error::GatewayResult;
use crate::gateway::SupportGateway;

#[derive(Debug, Clone, Default)]
pub struct CannedSupportGateway;

impl CannedSupportGateway {
    pub fn new() -> Self {
        Self
    }

    fn canned_carriers() -> Vec<CarrierOption> {
        vec![
            CarrierOption {
                name: "JadLog Expresso".to_string(),
                price: 38.9,
                eta_days: 2,
            },
            CarrierOption {
                name: "JadLog Rodoviário".to_string(),
                price: 24.5,
                eta_days: 6,
            },
            CarrierOption {
                name: "JadLog Econômico".to_string(),
                price: 19.9,
                eta_days: 9,
            },
        ]
    }
}

#[async_trait]
impl SupportGateway for CannedSupportGateway {
    async fn quote_freight(
        &self,
        request: FreightQuoteRequest,
    ) -> GatewayResult<FreightQuoteResponse> {
        info!("canned freight quote for CEP {}", request.cep);
        Ok(FreightQuoteResponse::ok(Self::canned_carriers()))
    }

    async fn record_freight_query(&self, cep: &str) -> GatewayResult<bool> {
        info!("canned record: freight query for CEP {cep}");
        Ok(true)
    }

    async fn record_order_query(&self, order_number: &str) -> GatewayResult<bool> {
        info!("canned record: order query #{order_number}");
        Ok(true)
    }

    async fn record_cancellation(&self, order_number: &str, status: &str) -> GatewayResult<bool> {
        info!("canned record: cancellation #{order_number} ({status})");
        Ok(true)
    }

    async fn record_payment_issue(&self, _description: &str) -> GatewayResult<bool> {
        info!("canned record: payment issue");
        Ok(true)
    }

    async fn record_product_question(&self, _description: &str) -> GatewayResult<bool> {
        info!("canned record: product question");
        Ok(true)
    }

    async fn save_ticket(&self, ticket: &SubmittedTicket) -> GatewayResult<bool> {
        info!("canned record: ticket {}", ticket.protocol);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_quote_always_succeeds() {
        let gateway = CannedSupportGateway::new();
        let response = gateway
            .quote_freight(FreightQuoteRequest::new("01310100"))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.carriers.len(), 3);
    }

    #[tokio::test]
    async fn test_canned_records_always_succeed() {
        let gateway = CannedSupportGateway::new();
        assert!(gateway.record_order_query("998").await.unwrap());
        assert!(gateway.record_cancellation("998", "solicitado").await.unwrap());
        assert!(gateway.record_payment_issue("x").await.unwrap());
        assert!(gateway.record_product_question("x").await.unwrap());
    }
}
