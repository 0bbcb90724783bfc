//! support_gateway - Backend gateway trait and adapters
//!
//! The dialog core records and queries backend facts through the
//! [`SupportGateway`] trait. `HttpSupportGateway` talks to the real backend;
//! `CannedSupportGateway` reproduces the offline variant with fixed data.

pub mod canned;
pub mod error;
pub mod gateway;
pub mod http;

pub use canned::CannedSupportGateway;
pub use error::{GatewayError, GatewayResult};
pub use gateway::SupportGateway;
pub use http::HttpSupportGateway;
