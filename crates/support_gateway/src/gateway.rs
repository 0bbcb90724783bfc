//! The gateway trait consumed by the dialog core
//!
//! Every operation fails independently; the dialog engine converts failures
//! to user-visible text and the session always lands in a safe state.

use async_trait::async_trait;
use support_core::{FreightQuoteRequest, FreightQuoteResponse, SubmittedTicket};

use crate::error::GatewayResult;

#[async_trait]
pub trait SupportGateway: Send + Sync {
    /// Quote carrier options for a destination CEP.
    async fn quote_freight(
        &self,
        request: FreightQuoteRequest,
    ) -> GatewayResult<FreightQuoteResponse>;

    /// Record that a freight quote was requested for this CEP.
    async fn record_freight_query(&self, cep: &str) -> GatewayResult<bool>;

    /// Record an order status query.
    async fn record_order_query(&self, order_number: &str) -> GatewayResult<bool>;

    /// Record an order cancellation with its status (e.g. "solicitado").
    async fn record_cancellation(&self, order_number: &str, status: &str) -> GatewayResult<bool>;

    /// Record a payment problem description.
    async fn record_payment_issue(&self, description: &str) -> GatewayResult<bool>;

    /// Record a product question.
    async fn record_product_question(&self, description: &str) -> GatewayResult<bool>;

    /// Persist a finalized support ticket.
    async fn save_ticket(&self, ticket: &SubmittedTicket) -> GatewayResult<bool>;
}
