//! Gateway error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Unavailable(u16),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
