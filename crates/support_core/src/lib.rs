//! support_core - Core types and helpers for the support chat system
//!
//! Shared by the dialog state machine, the gateway adapters, the backend
//! service and the CLI client.

pub mod cep;
pub mod config;
pub mod freight;
pub mod message;
pub mod protocol;
pub mod ticket;

// Re-export commonly used types
pub use config::Config;
pub use freight::{CarrierOption, FreightQuoteRequest, FreightQuoteResponse};
pub use message::{MessageRole, OutboundMessage};
pub use ticket::{SubmittedTicket, TicketDraft, TicketError};
